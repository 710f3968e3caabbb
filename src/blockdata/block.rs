// SPDX-License-Identifier: CC0-1.0

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which attaches to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use hashes::{sha256d, Hash, HashEngine};
use rug::Integer;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::Encodable;
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::util::pow;

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}
impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);

impl BlockHeader {
    /// Serialized length of the header, in bytes.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4;

    /// Returns the block hash, the double-SHA-256 of the 80-byte header.
    pub fn block_hash(&self) -> BlockHash {
        let mut engine = sha256d::Hash::engine();
        self.consensus_encode(&mut engine).expect("engines don't error");
        sha256d::Hash::from_engine(engine)
    }

    /// Computes the target [0, T] that a blockhash must land in to be valid
    pub fn target(&self) -> Integer {
        pow::target_from_compact(self.bits)
    }
}

/// A BuySellCoin block, which is a collection of transactions with an attached
/// proof of work.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}
impl_consensus_encoding!(Block, header, txdata);

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Calculate the transaction merkle root.
    pub fn compute_merkle_root(&self) -> TxMerkleNode {
        bitcoin_merkle_root(self.txdata.iter().map(|tx| tx.txid()).collect())
    }

    /// check if merkle root of header matches merkle root of the transaction list
    pub fn check_merkle_root(&self) -> bool {
        self.header.merkle_root == self.compute_merkle_root()
    }
}

/// Calculates the merkle root of a list of hashes, inline (in place) in `hashes`.
///
/// Odd levels duplicate their last element. An empty list yields the all-zero
/// hash; a single element is its own root.
pub fn bitcoin_merkle_root(mut hashes: Vec<sha256d::Hash>) -> sha256d::Hash {
    // Base case
    if hashes.is_empty() {
        return sha256d::Hash::from_inner([0u8; 32]);
    }
    while hashes.len() > 1 {
        // Recursion
        for idx in 0..((hashes.len() + 1) / 2) {
            let idx1 = 2 * idx;
            let idx2 = ::std::cmp::min(idx1 + 1, hashes.len() - 1);
            let mut encoder = sha256d::Hash::engine();
            encoder.input(&hashes[idx1].into_inner());
            encoder.input(&hashes[idx2].into_inner());
            hashes[idx] = sha256d::Hash::from_engine(encoder);
        }
        let half_len = hashes.len() / 2 + hashes.len() % 2;
        hashes.truncate(half_len);
    }
    hashes[0]
}

#[cfg(test)]
mod tests {
    use hashes::hex::FromHex;
    use hashes::{sha256d, Hash};
    use rug::Integer;

    use super::{bitcoin_merkle_root, BlockHeader};
    use crate::blockdata::constants::genesis_block;
    use crate::consensus::encode::serialize;

    fn hash_of(data: &[u8]) -> sha256d::Hash {
        sha256d::Hash::hash(data)
    }

    #[test]
    fn merkle_root_shapes() {
        let (a, b, c) = (hash_of(b"a"), hash_of(b"b"), hash_of(b"c"));

        assert_eq!(bitcoin_merkle_root(vec![]), sha256d::Hash::from_inner([0u8; 32]));
        assert_eq!(bitcoin_merkle_root(vec![a]), a);
        assert_eq!(
            format!("{:x}", bitcoin_merkle_root(vec![a, b])),
            "f01b8b33d4737f715303d502cd8dda6b2ea4f9513c169d94b18b5f2fa1a367b7"
        );
        // odd count duplicates the last leaf
        assert_eq!(
            format!("{:x}", bitcoin_merkle_root(vec![a, b, c])),
            "bf0ca48d50405f62cb40fa67c6f9fd9309e9a5fcb2ad05d3976ecb28839b4474"
        );
    }

    #[test]
    fn header_serialization() {
        let header = BlockHeader {
            version: 1,
            prev_blockhash: sha256d::Hash::from_inner([0u8; 32]),
            merkle_root: sha256d::Hash::from_hex(
                "cca1440d8e9d99a21438511cec9930f335d3b1e53f13e64f268204ad6d002cf3",
            ).unwrap(),
            time: 1565724242,
            bits: 0x1e0ffff0,
            nonce: 440309,
        };
        let bytes = serialize(&header);
        assert_eq!(bytes.len(), BlockHeader::SIZE);
        assert_eq!(
            bytes,
            hex::decode(concat!(
                "01000000",
                "0000000000000000000000000000000000000000000000000000000000000000",
                "f32c006dad0482264fe6133fe5b1d335f33099ec1c513814a2999d8e0d44a1cc",
                "520e535d",
                "f0ff0f1e",
                "f5b70600"
            )).unwrap()
        );
        assert_eq!(header.block_hash(), sha256d::Hash::hash(&bytes));
        assert_eq!(header.target(), Integer::from(0x0ffff0) << 216u32);
    }

    #[test]
    fn header_merkle_root_check() {
        let mut block = genesis_block("merkle check", 1565724242, 0x1e0ffff0, 0);
        assert!(block.check_merkle_root());
        assert_eq!(block.header.merkle_root, block.txdata[0].txid());

        block.txdata[0].time += 1;
        assert!(!block.check_merkle_root());

        block.header.merkle_root = block.compute_merkle_root();
        assert!(block.check_merkle_root());
    }
}
