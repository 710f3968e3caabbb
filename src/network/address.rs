// SPDX-License-Identifier: CC0-1.0

//! Seed addresses
//!
//! Fixed bootstrap peers ship as a packed table of IPv4 addresses. This module
//! turns such a table into endpoints a node can dial, each carrying a
//! synthetic "last seen" time.
//!
//! A node only ever talks to one or two of these peers: once connected it
//! learns a pile of addresses with newer timestamps. Seed peers are therefore
//! advertised as last seen between one and two weeks ago, so that fresher
//! addresses always win.
//!

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::warn;

use crate::network::constants::ServiceFlags;

/// Seconds in one week.
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A peer endpoint with the services it offers and when it was last seen.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedAddress {
    /// Services provided by the peer
    pub services: ServiceFlags,
    /// Endpoint to dial
    pub address: SocketAddr,
    /// Unix time the peer was (nominally) last seen
    pub time: u64,
}

impl fmt::Debug for SeedAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SeedAddress {{services: {}, address: {}, time: {}}}",
            self.services, self.address, self.time
        )
    }
}

/// Unpacks one table entry into an IPv4 address.
///
/// Entries are written so that they read as the dotted quad: `0x50D3BBA3`
/// is `80.211.187.163`. The entry is byte-swapped, and the swapped value's
/// little-endian bytes are the network-order octets.
pub fn unpack_ipv4(entry: u32) -> Ipv4Addr {
    Ipv4Addr::from(entry.swap_bytes().to_le_bytes())
}

/// Decodes a packed seed table against an explicit clock and random source.
///
/// Every endpoint is stamped `now - r - ONE_WEEK` with `r` drawn uniformly from
/// `[0, ONE_WEEK)`. Output order matches input order.
pub fn convert_seeds_at<R: Rng + ?Sized>(
    entries: &[u32],
    port: u16,
    now: u64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    entries
        .iter()
        .map(|&entry| SeedAddress {
            services: ServiceFlags::NETWORK,
            address: SocketAddr::V4(SocketAddrV4::new(unpack_ipv4(entry), port)),
            time: now.saturating_sub(rng.gen_range(0..ONE_WEEK)).saturating_sub(ONE_WEEK),
        })
        .collect()
}

/// Decodes a packed seed table using the wall clock and the thread-local RNG.
pub fn convert_seeds(entries: &[u32], port: u16) -> Vec<SeedAddress> {
    convert_seeds_at(entries, port, unix_time(), &mut rand::thread_rng())
}

/// Current Unix time in seconds; zero if the clock reads before the epoch.
pub fn unix_time() -> u64 {
    seconds_since_epoch(SystemTime::now())
}

/// Seconds from the Unix epoch to `at`, clamped to zero.
///
/// A clamped clock stamps every seed with time zero, outside the usual one to
/// two weeks window, so it is logged.
fn seconds_since_epoch(at: SystemTime) -> u64 {
    match at.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(e) => {
            warn!(behind = ?e.duration(), "system clock reads before the Unix epoch, using 0");
            0
        }
    }
}
