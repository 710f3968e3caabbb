// SPDX-License-Identifier: CC0-1.0

//! Chain parameters
//!
//! A [`ChainParams`] value holds everything that identifies one BuySellCoin
//! network: magic bytes, ports, genesis block, address prefixes and seeds.
//!
//! The main parameters are built from literals. The test parameters are the
//! main ones with a [`ParamsOverrides`] record applied, so any field the
//! record does not name is shared with the main network.
//!

use std::fmt;

use hashes::hex::FromHex;
use hashes::sha256d;
use secp256k1::PublicKey;
use tracing::debug;

use crate::blockdata::block::Block;
use crate::blockdata::constants::{genesis_block, restamp_genesis, verify_genesis};
use crate::consensus::params::{self, Params};
use crate::hash_types::BlockHash;
use crate::network::address::{convert_seeds, SeedAddress};
use crate::network::constants::{Network, MAIN_MAGIC, TEST_MAGIC};

pub mod seeds;
pub mod select;

/// Provenance text embedded in the genesis coinbase.
pub const GENESIS_TIMESTAMP: &str = "start BuySellCoin coin on Sunday 13th of August 2019 19-55-44 AM";
/// Difficulty bits of both genesis blocks.
pub const GENESIS_BITS: u32 = 0x1e0ffff0;
/// Merkle root of the genesis coinbase, shared by both networks.
// Earlier releases recorded f11d48344d8585e31c00c85e7d3d0b19cb0b0a50751d6542fa4d29f8bc5c46fb,
// which these inputs do not hash to. The three hashes here are re-derived.
pub const GENESIS_MERKLE_ROOT: &str = "cca1440d8e9d99a21438511cec9930f335d3b1e53f13e64f268204ad6d002cf3";

/// Main genesis block (and coinbase) time.
pub const MAIN_GENESIS_TIME: u32 = 1565724242;
/// Main genesis nonce.
pub const MAIN_GENESIS_NONCE: u32 = 440309;
/// Main genesis block hash.
// Previously recorded as 0c9eed44c7b5a7e8691397802764db34dda7628c22d34a7aca31a5d7e00c9a4d.
pub const MAIN_GENESIS_HASH: &str = "54e61d65225824ff15524f6fc06c30a75734d97f3299c3618e5371df37362b81";

/// Test genesis header time; the coinbase keeps the main time.
pub const TEST_GENESIS_TIME: u32 = 1565724243;
/// Test genesis nonce.
pub const TEST_GENESIS_NONCE: u32 = 216893;
/// Test genesis block hash.
// Previously recorded as fa4b8a8a1b3d3acadd91a033ace839fac2754ec7cf3680e42553117c6a0d156d.
pub const TEST_GENESIS_HASH: &str = "9477c358b3f2ed0cc3f991d3ed2e72a968aa777c7419185c81a733b7a03a93ff";

/// Key that signs network alerts, uncompressed.
pub const ALERT_PUBKEY: &str = "042d9aad81889a23c46bb4f15e3b605400d784ffb486c51f32a8e736f9a6276b96c24f2137e7046b4c288be41da0476b37607b21440389dac180b47558343ab91c";

/// Maximum number of transactions in one anonymizing-pool round.
pub const POOL_MAX_TRANSACTIONS: u32 = 3;
/// Placeholder address the anonymizing pool pays to.
pub const POOL_DUMMY_ADDRESS: &str = "fFoQDUrp63QWqFhjEr3Fmc4ubHRhyzjKUC";

/// The purposes a base58 version prefix distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// Exported private key
    SecretKey,
    /// Stealth address
    StealthAddress,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

impl Base58Type {
    /// Every prefix purpose.
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Base58 version bytes for each [`Base58Type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address prefix
    pub pubkey_address: &'static [u8],
    /// Pay-to-script-hash address prefix
    pub script_address: &'static [u8],
    /// Private key export prefix
    pub secret_key: &'static [u8],
    /// Stealth address prefix
    pub stealth_address: &'static [u8],
    /// Extended public key prefix
    pub ext_public_key: &'static [u8],
    /// Extended private key prefix
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    /// Main network prefixes.
    pub const MAIN: Base58Prefixes = Base58Prefixes {
        pubkey_address: &[35],
        script_address: &[95],
        secret_key: &[137],
        stealth_address: &[135],
        ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
        ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
    };

    /// Test network prefixes.
    pub const TEST: Base58Prefixes = Base58Prefixes {
        pubkey_address: &[127],
        script_address: &[196],
        secret_key: &[239],
        stealth_address: &[40],
        ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
        ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
    };

    /// The prefix for `ty`.
    pub fn get(&self, ty: Base58Type) -> &'static [u8] {
        match ty {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::StealthAddress => self.stealth_address,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }

    /// Whether no prefix is empty, equal to, or a leading part of another.
    ///
    /// A prefix-free set keeps payloads of different purposes from decoding
    /// as one another.
    pub fn is_prefix_free(&self) -> bool {
        Base58Type::ALL.iter().enumerate().all(|(i, &a)| {
            let pa = self.get(a);
            !pa.is_empty()
                && Base58Type::ALL[i + 1..].iter().all(|&b| {
                    let pb = self.get(b);
                    !pa.starts_with(pb) && !pb.starts_with(pa)
                })
        })
    }
}

/// A named DNS seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DnsSeed {
    /// Label of the seed
    pub name: &'static str,
    /// Host to resolve
    pub host: &'static str,
}

impl fmt::Display for DnsSeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.host, self.name)
    }
}

/// Everything that identifies one BuySellCoin network.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    /// Network these parameters describe
    pub network: Network,
    /// Bytes every P2P message starts with
    pub message_start: [u8; 4],
    /// Key that network alerts must be signed with
    pub alert_pubkey: PublicKey,
    /// Default P2P port
    pub default_port: u16,
    /// Default RPC port
    pub rpc_port: u16,
    /// Consensus thresholds, including the proof-of-work limit
    pub consensus: Params,
    /// The first block of the chain
    pub genesis: Block,
    /// Hash of `genesis`, checked at construction
    pub genesis_hash: BlockHash,
    /// Base58 version bytes
    pub base58_prefixes: Base58Prefixes,
    /// DNS seeds for live peer discovery
    pub dns_seeds: Vec<DnsSeed>,
    /// Last-resort bootstrap peers
    pub fixed_seeds: Vec<SeedAddress>,
    /// Subdirectory of the data directory holding this network's files
    pub data_dir: &'static str,
    /// Maximum number of transactions in one anonymizing-pool round
    pub pool_max_transactions: u32,
    /// Placeholder address the anonymizing pool pays to
    pub pool_dummy_address: &'static str,
}

/// The fields a derived network replaces; everything else is inherited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamsOverrides {
    /// Network the derived parameters describe
    pub network: Network,
    /// Message start bytes
    pub message_start: [u8; 4],
    /// Default P2P port
    pub default_port: u16,
    /// Default RPC port
    pub rpc_port: u16,
    /// Data subdirectory
    pub data_dir: &'static str,
    /// Genesis header time
    pub genesis_time: u32,
    /// Genesis difficulty bits
    pub genesis_bits: u32,
    /// Genesis nonce
    pub genesis_nonce: u32,
    /// Recorded hash of the restamped genesis block
    pub genesis_hash: &'static str,
    /// Base58 version bytes
    pub base58_prefixes: Base58Prefixes,
    /// DNS seeds, replacing the inherited list
    pub dns_seeds: &'static [DnsSeed],
    /// Packed fixed seeds, replacing the inherited list
    pub fixed_seeds: &'static [u32],
    /// Height of the last proof-of-work block
    pub last_pow_block: u32,
}

impl ParamsOverrides {
    /// What the test network changes relative to the main network.
    pub const TESTNET: ParamsOverrides = ParamsOverrides {
        network: Network::Testnet,
        message_start: TEST_MAGIC,
        default_port: 31407,
        rpc_port: 31408,
        data_dir: "testnet",
        genesis_time: TEST_GENESIS_TIME,
        genesis_bits: GENESIS_BITS,
        genesis_nonce: TEST_GENESIS_NONCE,
        genesis_hash: TEST_GENESIS_HASH,
        base58_prefixes: Base58Prefixes::TEST,
        dns_seeds: seeds::TEST_DNS_SEEDS,
        fixed_seeds: seeds::TEST_FIXED_SEEDS,
        last_pow_block: params::TEST_LAST_POW_BLOCK,
    };
}

fn hash_literal(hex: &str) -> sha256d::Hash {
    sha256d::Hash::from_hex(hex).expect("hash literals are valid hex")
}

/// Checks a freshly built genesis block against its recorded hashes.
///
/// # Panics
///
/// If either hash differs. A node must never run with a genesis identity
/// other than the recorded one.
fn checked_genesis_hash(network: Network, genesis: &Block, expected_hash: &str) -> BlockHash {
    debug!(
        %network,
        hash = %genesis.block_hash(),
        merkle_root = %genesis.header.merkle_root,
        nonce = genesis.header.nonce,
        time = genesis.header.time,
        "built genesis block"
    );
    match verify_genesis(genesis, &hash_literal(expected_hash), &hash_literal(GENESIS_MERKLE_ROOT)) {
        Ok(hash) => hash,
        Err(e) => panic!("{} genesis block failed its integrity check: {}", network, e),
    }
}

impl ChainParams {
    /// Builds the main network parameters.
    ///
    /// # Panics
    ///
    /// If the genesis block does not hash to the recorded values.
    pub fn main() -> ChainParams {
        let genesis = genesis_block(GENESIS_TIMESTAMP, MAIN_GENESIS_TIME, GENESIS_BITS, MAIN_GENESIS_NONCE);
        let genesis_hash = checked_genesis_hash(Network::Main, &genesis, MAIN_GENESIS_HASH);
        let alert_key = Vec::<u8>::from_hex(ALERT_PUBKEY).expect("alert key literal is valid hex");
        let default_port = 41426;

        ChainParams {
            network: Network::Main,
            message_start: MAIN_MAGIC,
            alert_pubkey: PublicKey::from_slice(&alert_key).expect("alert key literal is a curve point"),
            default_port,
            rpc_port: 41427,
            consensus: Params::new(Network::Main),
            genesis,
            genesis_hash,
            base58_prefixes: Base58Prefixes::MAIN,
            dns_seeds: seeds::MAIN_DNS_SEEDS.to_vec(),
            fixed_seeds: convert_seeds(seeds::MAIN_FIXED_SEEDS, default_port),
            data_dir: "",
            pool_max_transactions: POOL_MAX_TRANSACTIONS,
            pool_dummy_address: POOL_DUMMY_ADDRESS,
        }
    }

    /// Builds the test network parameters by deriving them from freshly built
    /// main ones.
    pub fn testnet() -> ChainParams {
        ChainParams::main().derive(&ParamsOverrides::TESTNET)
    }

    /// Applies `overrides` to a copy of these parameters.
    ///
    /// The genesis coinbase is kept and only its header is restamped; fixed
    /// seeds are decoded against the overridden default port.
    ///
    /// # Panics
    ///
    /// If the restamped genesis block does not hash to `overrides.genesis_hash`.
    pub fn derive(&self, overrides: &ParamsOverrides) -> ChainParams {
        let genesis = restamp_genesis(
            &self.genesis,
            overrides.genesis_time,
            overrides.genesis_bits,
            overrides.genesis_nonce,
        );
        let genesis_hash = checked_genesis_hash(overrides.network, &genesis, overrides.genesis_hash);

        ChainParams {
            network: overrides.network,
            message_start: overrides.message_start,
            default_port: overrides.default_port,
            rpc_port: overrides.rpc_port,
            consensus: Params {
                network: overrides.network,
                last_pow_block: overrides.last_pow_block,
                ..self.consensus.clone()
            },
            genesis,
            genesis_hash,
            base58_prefixes: overrides.base58_prefixes,
            dns_seeds: overrides.dns_seeds.to_vec(),
            fixed_seeds: convert_seeds(overrides.fixed_seeds, overrides.default_port),
            data_dir: overrides.data_dir,
            ..self.clone()
        }
    }

    /// The network these parameters describe.
    pub fn network_id(&self) -> Network {
        self.network
    }

    /// The base58 version bytes for `ty`.
    pub fn base58_prefix(&self, ty: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(ty)
    }

    /// Raw uncompressed bytes of the alert key.
    pub fn alert_key(&self) -> [u8; 65] {
        self.alert_pubkey.serialize_uncompressed()
    }

    /// Whether a message prefix belongs to this network.
    pub fn accepts_magic(&self, magic: [u8; 4]) -> bool {
        self.message_start == magic
    }
}

#[cfg(test)]
mod tests {
    use hashes::hex::ToHex;

    use super::{
        Base58Prefixes, Base58Type, ChainParams, DnsSeed, ParamsOverrides, ALERT_PUBKEY,
        GENESIS_MERKLE_ROOT, MAIN_GENESIS_HASH, TEST_GENESIS_HASH,
    };
    use crate::blockdata::constants::verify_genesis;
    use crate::consensus::params::pow_limit;
    use crate::network::address::ONE_WEEK;
    use crate::network::constants::Network;
    use crate::test_helpers::{decode_hash, main_params, testnet_params};

    #[test]
    fn main_params_literals() {
        let main = main_params();
        assert_eq!(main.network_id(), Network::Main);
        assert_eq!(main.message_start, [0x9d, 0x2a, 0x22, 0x5b]);
        assert_eq!(main.default_port, 41426);
        assert_eq!(main.rpc_port, 41427);
        assert_eq!(main.consensus.pow_limit, pow_limit());
        assert_eq!(main.consensus.last_pow_block, 600_000);
        assert_eq!(main.consensus.pos_start_block, 20);
        assert_eq!(main.data_dir, "");
        assert_eq!(main.pool_max_transactions, 3);
        assert_eq!(main.pool_dummy_address, "fFoQDUrp63QWqFhjEr3Fmc4ubHRhyzjKUC");
        assert_eq!(main.alert_key()[..].to_hex(), ALERT_PUBKEY);
        assert!(main.accepts_magic(Network::Main.magic()));
        assert!(!main.accepts_magic(Network::Testnet.magic()));
    }

    #[test]
    fn main_genesis_matches_recorded_hashes() {
        let main = main_params();
        assert_eq!(main.genesis_hash, decode_hash(MAIN_GENESIS_HASH));
        assert_eq!(main.genesis_hash, main.genesis.block_hash());
        assert_eq!(main.genesis.header.merkle_root, decode_hash(GENESIS_MERKLE_ROOT));
        assert_eq!(main.genesis.header.time, 1565724242);
        assert_eq!(main.genesis.header.bits, 0x1e0ffff0);
        assert_eq!(main.genesis.header.nonce, 440309);
        assert!(main.genesis.header.target() <= main.consensus.pow_limit);
    }

    #[test]
    fn superseded_genesis_hashes_are_rejected() {
        let main = main_params();
        let test = testnet_params();
        let old_merkle_root = "f11d48344d8585e31c00c85e7d3d0b19cb0b0a50751d6542fa4d29f8bc5c46fb";
        let old_main_hash = "0c9eed44c7b5a7e8691397802764db34dda7628c22d34a7aca31a5d7e00c9a4d";
        let old_test_hash = "fa4b8a8a1b3d3acadd91a033ace839fac2754ec7cf3680e42553117c6a0d156d";

        assert_ne!(main.genesis.header.merkle_root, decode_hash(old_merkle_root));
        assert_ne!(main.genesis_hash, decode_hash(old_main_hash));
        assert_ne!(test.genesis_hash, decode_hash(old_test_hash));
        assert!(verify_genesis(&main.genesis, &decode_hash(old_main_hash), &decode_hash(GENESIS_MERKLE_ROOT)).is_err());
        assert!(verify_genesis(&main.genesis, &main.genesis_hash, &decode_hash(old_merkle_root)).is_err());
    }

    #[test]
    fn main_prefixes() {
        let main = main_params();
        assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[35u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::ScriptAddress), &[95u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::SecretKey), &[137u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::StealthAddress), &[135u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::ExtPublicKey), &[0x04u8, 0x88, 0xB2, 0x1E][..]);
        assert_eq!(main.base58_prefix(Base58Type::ExtSecretKey), &[0x04u8, 0x88, 0xAD, 0xE4][..]);
        assert!(Base58Prefixes::MAIN.is_prefix_free());
        assert!(Base58Prefixes::TEST.is_prefix_free());

        let clash = Base58Prefixes { stealth_address: &[0x04], ..Base58Prefixes::MAIN };
        assert!(!clash.is_prefix_free());
        let empty = Base58Prefixes { secret_key: &[], ..Base58Prefixes::MAIN };
        assert!(!empty.is_prefix_free());
    }

    #[test]
    fn main_seeds() {
        let main = main_params();
        assert_eq!(
            main.dns_seeds,
            vec![
                DnsSeed { name: "0", host: "80.211.187.163" },
                DnsSeed { name: "1", host: "80.211.10.160" },
            ]
        );
        let endpoints: Vec<String> = main.fixed_seeds.iter().map(|s| s.address.to_string()).collect();
        assert_eq!(endpoints, vec!["80.211.187.163:41426", "80.211.10.160:41426"]);
        let now = crate::network::address::unix_time();
        for seed in &main.fixed_seeds {
            assert!(seed.time <= now - ONE_WEEK);
            assert!(seed.time + 2 * ONE_WEEK + 60 >= now);
        }
        assert_eq!(main.dns_seeds[0].to_string(), "80.211.187.163 (0)");
    }

    #[test]
    fn testnet_overrides() {
        let test = testnet_params();
        assert_eq!(test.network_id(), Network::Testnet);
        assert_eq!(test.consensus.network, Network::Testnet);
        assert_eq!(test.message_start, [0x1c, 0x8e, 0xa7, 0x1d]);
        assert_eq!(test.default_port, 31407);
        assert_eq!(test.rpc_port, 31408);
        assert_eq!(test.data_dir, "testnet");
        assert_eq!(test.consensus.last_pow_block, 0x7fffffff);
        assert_eq!(test.base58_prefixes, Base58Prefixes::TEST);
        assert_eq!(test.genesis_hash, decode_hash(TEST_GENESIS_HASH));
        assert_eq!(test.genesis.header.time, 1565724243);
        assert_eq!(test.genesis.header.nonce, 216893);
        assert_eq!(test.genesis.header.bits, 0x1e0ffff0);
        assert_eq!(test.genesis.header.merkle_root, decode_hash(GENESIS_MERKLE_ROOT));
    }

    #[test]
    fn testnet_clears_seed_lists() {
        let main = main_params();
        let test = testnet_params();
        assert!(!main.dns_seeds.is_empty());
        assert!(!main.fixed_seeds.is_empty());
        assert!(test.dns_seeds.is_empty());
        assert!(test.fixed_seeds.is_empty());
    }

    #[test]
    fn testnet_inherits_everything_else() {
        let main = main_params();
        let test = testnet_params();

        // Put back every overridden field; what remains must be the main set.
        let mut restored = test.clone();
        restored.network = main.network;
        restored.message_start = main.message_start;
        restored.default_port = main.default_port;
        restored.rpc_port = main.rpc_port;
        restored.data_dir = main.data_dir;
        restored.genesis = main.genesis.clone();
        restored.genesis_hash = main.genesis_hash;
        restored.base58_prefixes = main.base58_prefixes;
        restored.dns_seeds = main.dns_seeds.clone();
        restored.fixed_seeds = main.fixed_seeds.clone();
        restored.consensus.network = main.consensus.network;
        restored.consensus.last_pow_block = main.consensus.last_pow_block;
        assert_eq!(&restored, main);

        // The genesis coinbase itself is shared.
        assert_eq!(test.genesis.txdata, main.genesis.txdata);
        assert_eq!(test.genesis.header.prev_blockhash, main.genesis.header.prev_blockhash);
        assert_eq!(test.genesis.header.version, main.genesis.header.version);
    }

    #[test]
    fn derive_is_repeatable() {
        let main = main_params();
        let once = main.derive(&ParamsOverrides::TESTNET);
        let twice = main.derive(&ParamsOverrides::TESTNET);
        assert_eq!(once, twice);
        assert_eq!(&once, testnet_params());
    }

    #[test]
    #[should_panic(expected = "genesis block failed its integrity check")]
    fn derive_rejects_wrong_genesis_hash() {
        let overrides = ParamsOverrides {
            genesis_nonce: 216894,
            ..ParamsOverrides::TESTNET
        };
        main_params().derive(&overrides);
    }

    #[test]
    #[should_panic(expected = "genesis block failed its integrity check")]
    fn derive_rejects_recorded_hash_drift() {
        let overrides = ParamsOverrides {
            genesis_hash: MAIN_GENESIS_HASH,
            ..ParamsOverrides::TESTNET
        };
        ChainParams::main().derive(&overrides);
    }
}
