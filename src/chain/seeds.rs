// SPDX-License-Identifier: CC0-1.0

//! Bootstrap peer tables
//!
//! Each fixed-seed entry packs an IPv4 address so that its hex spelling reads
//! as the dotted quad; see [`unpack_ipv4`](crate::network::address::unpack_ipv4).
//!

use crate::chain::DnsSeed;

/// DNS seeds of the main network.
pub const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed { name: "0", host: "80.211.187.163" },
    DnsSeed { name: "1", host: "80.211.10.160" },
];

/// Fixed seeds of the main network.
pub const MAIN_FIXED_SEEDS: &[u32] = &[
    0x50d3bba3, // 80.211.187.163
    0x50d30aa0, // 80.211.10.160
];

/// The test network has no DNS seeds.
pub const TEST_DNS_SEEDS: &[DnsSeed] = &[];

/// The test network has no fixed seeds.
pub const TEST_FIXED_SEEDS: &[u32] = &[];
