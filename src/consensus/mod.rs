// SPDX-License-Identifier: CC0-1.0

//! Consensus
//!
//! This module defines structures, functions, and traits which are needed to
//! conform to BuySellCoin consensus: the byte-exact serialization used for
//! hashing, and the per-network consensus thresholds.
//!

pub mod encode;
pub mod params;

pub use self::encode::{serialize, serialize_hex, Encodable};
pub use self::params::Params;
