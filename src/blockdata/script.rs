// SPDX-License-Identifier: CC0-1.0

//! Script
//!
//! Scripts define BuySellCoin's digital signature scheme: a signature is formed
//! from a script (the second half of which is defined by a coin to be spent,
//! and the first half provided by the spending transaction), and is valid
//! iff the script leaves `TRUE` on the stack after being evaluated.
//!
//! This module only builds scripts; nothing here executes them.
//!

use std::{fmt, io};

use hashes::hex::ToHex;

use crate::blockdata::opcodes;
use crate::consensus::encode::{self, Encodable};

#[derive(Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
/// A BuySellCoin script
pub struct Script(Box<[u8]>);

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", self.0.to_hex())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

/// Helper to encode an integer in script format
fn build_scriptint(n: i64) -> Vec<u8> {
    if n == 0 {
        return vec![];
    }

    let neg = n < 0;

    let mut abs = if neg { -n } else { n } as usize;
    let mut v = vec![];
    while abs > 0xFF {
        v.push((abs & 0xFF) as u8);
        abs >>= 8;
    }
    // If the number's value causes the sign bit to be set, we need an extra
    // byte to get the correct value and correct sign bit
    if abs & 0x80 != 0 {
        v.push(abs as u8);
        v.push(if neg { 0x80u8 } else { 0u8 });
    }
    // Otherwise we just set the sign bit ourselves
    else {
        abs |= if neg { 0x80 } else { 0 };
        v.push(abs as u8);
    }
    v
}

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![].into_boxed_slice())
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the script data
    pub fn as_bytes(&self) -> &[u8] {
        &*self.0
    }

    /// Returns a copy of the script data
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone().into_vec()
    }

    /// Convert the script into a byte vector
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_vec()
    }
}

impl From<Vec<u8>> for Script {
    fn from(v: Vec<u8>) -> Script {
        Script(v.into_boxed_slice())
    }
}

impl Encodable for Script {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, encode::Error> {
        self.0[..].consensus_encode(s)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
/// An object which can be used to construct a script piece by piece
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script
    pub fn new() -> Self {
        Builder(vec![])
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds instructions to push an integer onto the stack. Integers are
    /// encoded as little-endian signed-magnitude numbers, but there are
    /// dedicated opcodes to push some small integers.
    pub fn push_int(self, data: i64) -> Builder {
        // We can special-case -1, 1-16
        if data == -1 || (data >= 1 && data <= 16) {
            let opcode = opcodes::All::from((data - 1 + opcodes::all::OP_PUSHNUM_1.into_u8() as i64) as u8);
            self.push_opcode(opcode)
        }
        // We can also special-case zero
        else if data == 0 {
            self.push_opcode(opcodes::all::OP_FALSE)
        }
        // Otherwise encode it as data
        else {
            self.push_scriptint(data)
        }
    }

    /// Adds instructions to push an integer onto the stack, using the explicit
    /// encoding regardless of the availability of dedicated opcodes.
    pub fn push_scriptint(self, data: i64) -> Builder {
        self.push_slice(&build_scriptint(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        // Start with a PUSH opcode
        match data.len() as u64 {
            n if n < opcodes::all::OP_PUSHDATA1.into_u8() as u64 => {
                self.0.push(n as u8);
            }
            n if n < 0x100 => {
                self.0.push(opcodes::all::OP_PUSHDATA1.into_u8());
                self.0.push(n as u8);
            }
            n if n < 0x10000 => {
                self.0.push(opcodes::all::OP_PUSHDATA2.into_u8());
                self.0.push((n % 0x100) as u8);
                self.0.push((n / 0x100) as u8);
            }
            n if n < 0x100000000 => {
                self.0.push(opcodes::all::OP_PUSHDATA4.into_u8());
                self.0.push((n % 0x100) as u8);
                self.0.push(((n / 0x100) % 0x100) as u8);
                self.0.push(((n / 0x10000) % 0x100) as u8);
                self.0.push((n / 0x1000000) as u8);
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        // Then push the raw bytes
        self.0.extend(data.iter().cloned());
        self
    }

    /// Adds a single opcode to the script
    pub fn push_opcode(mut self, data: opcodes::All) -> Builder {
        self.0.push(data.into_u8());
        self
    }

    /// Converts the `Builder` into an unmodifiable `Script`
    pub fn into_script(self) -> Script {
        Script(self.0.into_boxed_slice())
    }
}

impl From<Vec<u8>> for Builder {
    fn from(v: Vec<u8>) -> Builder {
        Builder(v)
    }
}

#[cfg(test)]
mod test {
    use hex::decode as hex_decode;

    use super::{build_scriptint, Builder, Script};
    use crate::blockdata::opcodes;
    use crate::consensus::encode::serialize;

    #[test]
    fn script_builder() {
        // from txid 3bb5e6434c11fb93f64574af5d116736510717f2c595eb45b52c28e31622dfff which was in my mempool when I wrote the test
        let script = Builder::new()
            .push_int(0)
            .push_slice(&hex_decode("16e1ae70ff0fa102905d4af297f6912bda6cce19").unwrap())
            .into_script();
        assert_eq!(&format!("{:x}", script), "001416e1ae70ff0fa102905d4af297f6912bda6cce19");
    }

    #[test]
    fn script_integers() {
        assert_eq!(build_scriptint(0), Vec::<u8>::new());
        assert_eq!(build_scriptint(1), vec![1u8]);
        assert_eq!(build_scriptint(42), vec![42u8]);
        assert_eq!(build_scriptint(-1), vec![0x81u8]);
        assert_eq!(build_scriptint(127), vec![127u8]);
        assert_eq!(build_scriptint(128), vec![128u8, 0]);
        assert_eq!(build_scriptint(-128), vec![128u8, 0x80]);
        assert_eq!(build_scriptint(256), vec![0u8, 1]);
        assert_eq!(build_scriptint(486604799), vec![0xffu8, 0xff, 0x00, 0x1d]);

        let script = Builder::new().push_int(0).push_int(4).push_int(-1).push_int(42).into_script();
        assert_eq!(script.as_bytes(), &[0x00u8, 0x54, 0x4f, 0x01, 0x2a][..]);
        assert_eq!(format!("{:?}", opcodes::All::from(script.as_bytes()[1])), "OP_PUSHNUM_4");
    }

    #[test]
    fn script_push_sizes() {
        let small = Builder::new().push_slice(&[7u8; 75]).into_script();
        assert_eq!(small.as_bytes()[0], 75);
        assert_eq!(small.len(), 76);

        let pushdata1 = Builder::new().push_slice(&[7u8; 76]).into_script();
        assert_eq!(&pushdata1.as_bytes()[..2], &[0x4cu8, 76][..]);

        let pushdata2 = Builder::new().push_slice(&[7u8; 0x1234]).into_script();
        assert_eq!(&pushdata2.as_bytes()[..3], &[0x4du8, 0x34, 0x12][..]);
    }

    #[test]
    fn script_serialize() {
        assert_eq!(serialize(&Script::new()), vec![0u8]);
        let script = Script::from(vec![0x51u8, 0x52]);
        assert_eq!(serialize(&script), vec![2u8, 0x51, 0x52]);
        assert!(!script.is_empty());
        assert_eq!(script.to_bytes(), script.clone().into_bytes());
    }
}
