// SPDX-License-Identifier: CC0-1.0

//! # BuySellCoin chain parameters
//!
//! This library holds the immutable, network-identifying parameters that
//! every BuySellCoin node must agree on byte-for-byte: the genesis block,
//! the message-start (magic) bytes, default ports, base58 address prefixes
//! and the bootstrap peer lists.
//!
//! Two parameter sets exist, [`Network::Main`] and [`Network::Testnet`]. The
//! test set is derived from the main one by an explicit overrides record.
//! Building either set rebuilds its genesis block from literal inputs and
//! refuses to continue if the computed hashes drift from the recorded ones.
//!
//! ```rust
//! use chainparams::{params, select_params, Network};
//!
//! select_params(Network::Main);
//! assert_eq!(params().default_port, 41426);
//! ```
//!

#![crate_name = "chainparams"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

// Re-exported dependencies.
pub extern crate bitcoin_hashes as hashes;
pub extern crate rug;
pub extern crate secp256k1;

#[macro_use]
extern crate lazy_static;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(test)]
mod test_helpers;
#[macro_use]
mod internal_macros;
pub mod blockdata;
pub mod chain;
pub mod consensus;
pub mod hash_types;
pub mod network;
pub mod util;

pub use crate::blockdata::block::{Block, BlockHeader};
pub use crate::blockdata::constants::{genesis_block, verify_genesis, GenesisError};
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
pub use crate::chain::select::{params, select_params, select_params_from_args, BoolArgs};
pub use crate::chain::{Base58Type, ChainParams, DnsSeed};
pub use crate::consensus::encode::VarInt;
pub use crate::hash_types::*;
pub use crate::network::address::SeedAddress;
pub use crate::network::constants::{Network, ParseNetworkError, ServiceFlags};
