// SPDX-License-Identifier: CC0-1.0

//! Network Support
//!
//! This module defines support for the parts of the BuySellCoin peer-to-peer
//! protocol that the chain parameters pin down: which network a message
//! belongs to, and where to find the first peers.
//!

pub mod address;
pub mod constants;
