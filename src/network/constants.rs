// SPDX-License-Identifier: CC0-1.0

//! Network constants
//!
//! This module provides various constants relating to the BuySellCoin network
//! protocol, such as the networks a node can join and their magic header
//! bytes.
//!
//! # Example: looking up a network from its magic bytes
//!
//! ```rust
//! use chainparams::network::constants::Network;
//!
//! let magic = Network::Main.magic();
//! assert_eq!(magic, [0x9d, 0x2a, 0x22, 0x5b]);
//! assert_eq!(Network::from_magic(magic), Some(Network::Main));
//! ```

use std::{error, fmt, ops};
use std::str::FromStr;

/// Message start bytes of the main network.
///
/// The characters are rarely used upper ASCII, not valid as UTF-8, and produce
/// a large 4-byte int at any alignment.
pub const MAIN_MAGIC: [u8; 4] = [0x9d, 0x2a, 0x22, 0x5b];
/// Message start bytes of the test network.
pub const TEST_MAGIC: [u8; 4] = [0x1c, 0x8e, 0xa7, 0x1d];

/// The BuySellCoin network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Network {
    /// The production network
    #[cfg_attr(feature = "serde", serde(rename = "main"))]
    Main,
    /// The public test network
    #[cfg_attr(feature = "serde", serde(rename = "test"))]
    Testnet,
}

impl Network {
    /// Every network a node can select, in selection order.
    pub const ALL: [Network; 2] = [Network::Main, Network::Testnet];

    /// Return the network magic bytes, which are sent in this order at the
    /// start of every message
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainparams::network::constants::Network;
    ///
    /// assert_eq!(Network::Testnet.magic(), [0x1c, 0x8e, 0xa7, 0x1d]);
    /// ```
    pub fn magic(self) -> [u8; 4] {
        match self {
            Network::Main => MAIN_MAGIC,
            Network::Testnet => TEST_MAGIC,
        }
    }

    /// Finds the network a message prefix belongs to.
    pub fn from_magic(magic: [u8; 4]) -> Option<Network> {
        Network::ALL.iter().cloned().find(|n| n.magic() == magic)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = match s {
            "main" => Network::Main,
            "test" => Network::Testnet,
            _ => return Err(ParseNetworkError(s.to_owned())),
        };
        Ok(network)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Network::Main => "main",
            Network::Testnet => "test",
        };
        f.pad(s)
    }
}

/// Flags to indicate which network services a node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// NONE means no services supported.
    pub const NONE: ServiceFlags = ServiceFlags(0);

    /// NETWORK means that the node is capable of serving the complete block chain.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);

    /// Add [ServiceFlags] together.
    ///
    /// Returns itself.
    pub fn add(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 |= other.0;
        *self
    }

    /// Check whether [ServiceFlags] are included in this one.
    pub fn has(&self, flags: ServiceFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of this [ServiceFlags].
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ServiceFlags::NONE {
            return write!(f, "ServiceFlags(NONE)");
        }
        let rest = self.0 & !ServiceFlags::NETWORK.0;
        write!(f, "ServiceFlags(")?;
        if self.has(ServiceFlags::NETWORK) {
            write!(f, "NETWORK")?;
            if rest != 0 {
                write!(f, "|")?;
            }
        }
        // Unknown flags are appended in hex.
        if rest != 0 {
            write!(f, "0x{:x}", rest)?;
        }
        write!(f, ")")
    }
}

impl From<u64> for ServiceFlags {
    fn from(f: u64) -> Self {
        ServiceFlags(f)
    }
}

impl ops::BitOr for ServiceFlags {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.add(rhs)
    }
}
