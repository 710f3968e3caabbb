// SPDX-License-Identifier: CC0-1.0

//! Transactions
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones, satisfying the condition to spend
//! the old outputs (typically a digital signature with a specific key must be
//! provided) and defining the condition to spend the new ones.
//!
//! BuySellCoin is a proof-of-stake chain, so every transaction also carries
//! its own timestamp between the version and the inputs.
//!

use std::default::Default;

use hashes::{sha256d, Hash};

use crate::blockdata::script::Script;
use crate::consensus::encode::{serialize, Encodable};
use crate::hash_types::Txid;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}
impl_consensus_encoding!(OutPoint, txid, vout);

impl OutPoint {
    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint {
            txid: sha256d::Hash::from_inner([0u8; 32]),
            vout: u32::max_value(),
        }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxIn {
    /// The reference to the previous output that is being used an an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn {
            previous_output: OutPoint::default(),
            script_sig: Script::new(),
            sequence: u32::max_value(),
        }
    }
}

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxOut {
    /// The value of the output, in satoshis
    pub value: i64,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}
impl_consensus_encoding!(TxOut, value, script_pubkey);

impl TxOut {
    /// An output with zero value and an empty claim script. Nothing can spend it.
    pub fn empty() -> TxOut {
        TxOut {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    /// Whether this output carries no value and no claim script.
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Default for TxOut {
    fn default() -> TxOut {
        TxOut::empty()
    }
}

/// A BuySellCoin transaction, which describes an authenticated movement of coins.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1.
    pub version: i32,
    /// Creation time of the transaction, used by the stake kernel.
    pub time: u32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately.
    pub lock_time: u32,
}
impl_consensus_encoding!(Transaction, version, time, input, output, lock_time);

impl_vec!(TxIn);
impl_vec!(TxOut);
impl_vec!(Transaction);

impl Transaction {
    /// Computes the txid. This is the double-SHA-256 of the full serialization.
    pub fn txid(&self) -> Txid {
        sha256d::Hash::hash(&serialize(self))
    }

    /// The length of the transaction's consensus serialization in bytes.
    pub fn get_size(&self) -> usize {
        let mut counter = ByteCounter(0);
        self.consensus_encode(&mut counter).expect("counters don't error");
        counter.0
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }
}

struct ByteCounter(usize);

impl std::io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
