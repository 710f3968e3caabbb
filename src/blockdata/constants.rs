// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it builds the genesis block and its
//! single transaction, and checks the result against recorded hashes.
//!

use std::{error, fmt};

use hashes::{sha256d, Hash};

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::{BlockHash, TxMerkleNode};

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// Number pushed after the leading zero in the genesis unlocking script.
pub const GENESIS_SCRIPT_NUMBER: i64 = 42;

/// Constructs the coinbase (and only) transaction of a genesis block.
///
/// The input spends nothing and its script embeds `timestamp`; the single
/// output is empty so the coinbase can never be redeemed.
pub fn genesis_tx(timestamp: &str, time: u32) -> Transaction {
    // Base
    let mut ret = Transaction {
        version: 1,
        time,
        input: vec![],
        output: vec![],
        lock_time: 0,
    };

    // Inputs
    let in_script = script::Builder::new()
        .push_int(0)
        .push_scriptint(GENESIS_SCRIPT_NUMBER)
        .push_slice(timestamp.as_bytes())
        .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    ret.output.push(TxOut::empty());

    // end
    ret
}

/// Constructs a genesis block from its literal inputs.
///
/// `time` stamps both the coinbase transaction and the header.
pub fn genesis_block(timestamp: &str, time: u32, bits: u32, nonce: u32) -> Block {
    let txdata = vec![genesis_tx(timestamp, time)];
    let merkle_root = txdata[0].txid();
    Block {
        header: BlockHeader {
            version: 1,
            prev_blockhash: sha256d::Hash::from_inner([0u8; 32]),
            merkle_root,
            time,
            bits,
            nonce,
        },
        txdata,
    }
}

/// Builds a genesis block and returns it with its hash and Merkle root.
pub fn build_genesis(
    timestamp: &str,
    time: u32,
    bits: u32,
    nonce: u32,
) -> (Block, BlockHash, TxMerkleNode) {
    let block = genesis_block(timestamp, time, bits, nonce);
    let hash = block.block_hash();
    let merkle_root = block.compute_merkle_root();
    (block, hash, merkle_root)
}

/// Copies `base` with a new header time, difficulty and nonce.
///
/// The coinbase transaction, and so the Merkle root, is left untouched.
pub fn restamp_genesis(base: &Block, time: u32, bits: u32, nonce: u32) -> Block {
    let mut block = base.clone();
    block.header.time = time;
    block.header.bits = bits;
    block.header.nonce = nonce;
    block
}

/// A genesis block that does not hash to its recorded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    /// The Merkle root of the coinbase differs from the recorded one.
    MerkleRootMismatch {
        /// Recorded value.
        expected: TxMerkleNode,
        /// Value computed from the block.
        computed: TxMerkleNode,
    },
    /// The header hash differs from the recorded one.
    BlockHashMismatch {
        /// Recorded value.
        expected: BlockHash,
        /// Value computed from the block.
        computed: BlockHash,
    },
}

impl fmt::Display for GenesisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenesisError::MerkleRootMismatch { ref expected, ref computed } => write!(
                f,
                "genesis merkle root mismatch: expected {}, computed {}",
                expected, computed
            ),
            GenesisError::BlockHashMismatch { ref expected, ref computed } => write!(
                f,
                "genesis block hash mismatch: expected {}, computed {}",
                expected, computed
            ),
        }
    }
}

impl error::Error for GenesisError {}

/// Checks `block` against its recorded Merkle root and hash.
///
/// Returns the computed block hash. The Merkle root is checked both against
/// the header and against the value recomputed from the transactions.
pub fn verify_genesis(
    block: &Block,
    expected_hash: &BlockHash,
    expected_merkle_root: &TxMerkleNode,
) -> Result<BlockHash, GenesisError> {
    let merkle_root = block.compute_merkle_root();
    if merkle_root != *expected_merkle_root || !block.check_merkle_root() {
        return Err(GenesisError::MerkleRootMismatch {
            expected: *expected_merkle_root,
            computed: merkle_root,
        });
    }
    let hash = block.block_hash();
    if hash != *expected_hash {
        return Err(GenesisError::BlockHashMismatch {
            expected: *expected_hash,
            computed: hash,
        });
    }
    Ok(hash)
}
