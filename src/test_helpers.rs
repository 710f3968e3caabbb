// SPDX-License-Identifier: CC0-1.0

//! Internal helper functions for unit tests
//!
//!

use hashes::hex::FromHex;
use hashes::sha256d;
use parking_lot::Mutex;

use crate::chain::select::params_for;
use crate::chain::ChainParams;
use crate::network::constants::Network;

lazy_static! {
    /// Held by every test that changes the selected network.
    pub static ref SELECTION_LOCK: Mutex<()> = Mutex::new(());
}

pub fn decode_hash(hash_hex: &str) -> sha256d::Hash {
    sha256d::Hash::from_hex(hash_hex).unwrap()
}

pub fn main_params() -> &'static ChainParams {
    params_for(Network::Main)
}

pub fn testnet_params() -> &'static ChainParams {
    params_for(Network::Testnet)
}
