// SPDX-License-Identifier: CC0-1.0

//! File defines types for hashes used throughout the library.
//!
//! All of them are double-SHA-256 digests and display byte-reversed, the
//! way block explorers and the reference client print them.
//!

use hashes::sha256d;

/// A transaction hash/transaction ID.
pub type Txid = sha256d::Hash;
/// A block hash.
pub type BlockHash = sha256d::Hash;
/// A hash of the Merkle tree branch or root for transactions.
pub type TxMerkleNode = sha256d::Hash;
