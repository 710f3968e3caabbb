// SPDX-License-Identifier: CC0-1.0

//! Consensus parameters
//!
//! This module provides predefined set of parameters for different chains.
//!

use rug::Integer;

use crate::network::constants::Network;

/// Height at which proof-of-work mining stops on the main network.
pub const MAIN_LAST_POW_BLOCK: u32 = 600_000;
/// Proof-of-work never stops on the test network.
pub const TEST_LAST_POW_BLOCK: u32 = 0x7fff_ffff;
/// Height from which proof-of-stake blocks are accepted.
pub const POS_START_BLOCK: u32 = 20;

/// The easiest target a block hash may satisfy, `~uint256(0) >> 16`.
pub fn pow_limit() -> Integer {
    let mut limit = Integer::from(1);
    limit <<= 240u32;
    limit -= 1u32;
    limit
}

#[derive(Debug, Clone, PartialEq)]
/// Parameters that influence chain consensus.
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Maximum-difficulty target; no valid block hash exceeds it.
    pub pow_limit: Integer,
    /// Height of the last block that may be mined by proof-of-work.
    pub last_pow_block: u32,
    /// Height from which proof-of-stake blocks are accepted.
    pub pos_start_block: u32,
}

impl Params {
    /// Creates parameters set for the given network.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Main => Params {
                network: Network::Main,
                pow_limit: pow_limit(),
                last_pow_block: MAIN_LAST_POW_BLOCK,
                pos_start_block: POS_START_BLOCK,
            },
            Network::Testnet => Params {
                network: Network::Testnet,
                pow_limit: pow_limit(),
                last_pow_block: TEST_LAST_POW_BLOCK,
                pos_start_block: POS_START_BLOCK,
            },
        }
    }

    /// Whether a block at `height` may still be mined by proof-of-work.
    pub fn is_pow_height(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }

    /// Whether a block at `height` may be minted by proof-of-stake.
    pub fn is_pos_height(&self, height: u32) -> bool {
        height >= self.pos_start_block
    }
}
