//! Per-network parameter sets and the override chain that builds them.
//!
//! Each network is one fully populated `ChainParams`. Production is defined
//! from scratch; TestNet is a copy of Production with an itemized list of
//! overrides; RegTest is a copy of TestNet with a further list. Fields not
//! named in a network's factory are inherited from its parent unchanged, so
//! every constant's provenance is readable straight from the three factories.

use std::fmt;

use hex_literal::hex;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::block::Block;
use super::genesis::{self, GenesisConstants};
use super::seeds::{self, timestamped_seeds, SeedAddress};
use super::value_objects::{compact_from_target, Hash256};

/// Network identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    #[default]
    Production,
    /// The public test network.
    TestNet,
    /// The local regression-test network.
    RegTest,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::TestNet => write!(f, "testnet"),
            Self::RegTest => write!(f, "regtest"),
        }
    }
}

/// The roles a base58 version prefix can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Role {
    /// Public-key (pay-to-pubkey-hash) addresses.
    PubkeyAddress,
    /// Script (pay-to-script-hash) addresses.
    ScriptAddress,
    /// Private-key (WIF) encoding.
    SecretKey,
    /// Extended public keys.
    ExtPublicKey,
    /// Extended private keys.
    ExtSecretKey,
}

/// Version-byte prefixes for base58 address encoding, one per role.
///
/// These determine the leading character(s) of addresses and keys rendered
/// for users, and bind every encoded string to one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// Prefix for public-key addresses.
    pub pubkey_address: &'static [u8],
    /// Prefix for script addresses.
    pub script_address: &'static [u8],
    /// Prefix for private-key encoding.
    pub secret_key: &'static [u8],
    /// Prefix for extended public keys.
    pub ext_public_key: &'static [u8],
    /// Prefix for extended private keys.
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    /// Look up the prefix for a role.
    pub fn prefix(&self, role: Base58Role) -> &'static [u8] {
        match role {
            Base58Role::PubkeyAddress => self.pubkey_address,
            Base58Role::ScriptAddress => self.script_address,
            Base58Role::SecretKey => self.secret_key,
            Base58Role::ExtPublicKey => self.ext_public_key,
            Base58Role::ExtSecretKey => self.ext_secret_key,
        }
    }
}

/// One DNS-based discovery entry: a display name and the host to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSeed {
    /// Name shown in peer listings.
    pub name: &'static str,
    /// Hostname queried for peer addresses.
    pub host: &'static str,
}

/// Coinbase timestamp shared by all three genesis blocks.
const GENESIS_COINBASE_TIME: u32 = 1393221600;

/// Launch message embedded in the shared coinbase.
const GENESIS_COINBASE_PAYLOAD: &[u8] = b"GreenCoinV2 Launches.";

/// Merkle root of the shared genesis coinbase.
const GENESIS_MERKLE_ROOT: Hash256 = Hash256::from_be_bytes(hex!(
    "f13219df992036c16529305d015d11fe84ee11550d060bfed7a8cc58951040c4"
));

const PRODUCTION_GENESIS_HASH: Hash256 = Hash256::from_be_bytes(hex!(
    "000009b88ae01c8e009d08651c904a1b00f9e24d72538f49c242ba2ee14d859a"
));
const TESTNET_GENESIS_HASH: Hash256 = Hash256::from_be_bytes(hex!(
    "00003845b6cba6a72017f62f5299ecfbb832a4675082543d2db1e091b37a4b80"
));
const REGTEST_GENESIS_HASH: Hash256 = Hash256::from_be_bytes(hex!(
    "005526eaf237a937d98a85568d99a317b658ca29d12a8e23033e003828087bba"
));

const PRODUCTION_ALERT_KEY: [u8; 65] = hex!(
    "0486bce1bac0d543f104cbff2bd23680056a3b9ea05e1137d2ff90eeb5e08472eb500322593a2cb06fbf8297d7beb6cd30cb90f98153b5b7cce1493749e41e0284"
);
const TESTNET_ALERT_KEY: [u8; 65] = hex!(
    "0471dc165db490094d35cde15b1f5d755fa6ad6f2b5ed0f340e3f17f57389c3c2af113a8cbcc885bde73305a553b5640c83021128008ddf882e856336269080496"
);

const PRODUCTION_BASE58: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[38],
    script_address: &[85],
    secret_key: &[166],
    ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
};

const TESTNET_BASE58: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[112],
    script_address: &[196],
    secret_key: &[240],
    ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
};

/// The immutable parameter set of one network.
///
/// Built once at startup and never mutated; every other subsystem reads
/// these constants through the active-network selector.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Which network this set describes.
    pub network: Network,
    /// Four bytes prefixing every wire message on this network.
    pub message_start: [u8; 4],
    /// Default peer-listen port.
    pub default_port: u16,
    /// Default RPC-listen port.
    pub rpc_port: u16,
    /// Easiest target a valid block header may carry.
    pub proof_of_work_limit: U256,
    /// Public key authenticating out-of-band network alerts.
    pub alert_key: &'static [u8],
    /// Base58 version prefixes, per role.
    pub base58_prefixes: Base58Prefixes,
    /// The network's genesis block.
    pub genesis_block: Block,
    /// Hash of the genesis header; always equals the embedded expected
    /// constant, verified at construction.
    pub genesis_hash: Hash256,
    /// Compiled-in bootstrap peers with synthetic last-seen timestamps.
    pub fixed_seeds: Vec<SeedAddress>,
    /// DNS-based discovery entries.
    pub dns_seeds: &'static [DnsSeed],
    /// Suffix appended to the node's state directory; empty for production.
    pub data_dir_suffix: &'static str,
    /// Height after which proof-of-work blocks are no longer accepted.
    pub last_pow_height: Option<u32>,
    /// Whether the RPC server refuses to start without a credential.
    pub require_rpc_password: bool,
}

impl ChainParams {
    /// Build the production parameter set.
    pub fn production() -> Self {
        let proof_of_work_limit = U256::MAX >> 20;
        let genesis_block = genesis::build(&GenesisConstants {
            time: 1450199185,
            bits: compact_from_target(proof_of_work_limit),
            nonce: 921682,
            coinbase_time: GENESIS_COINBASE_TIME,
            payload: GENESIS_COINBASE_PAYLOAD,
        });
        let genesis_hash = genesis::verify(
            Network::Production,
            &genesis_block,
            PRODUCTION_GENESIS_HASH,
            GENESIS_MERKLE_ROOT,
        );

        let params = Self {
            network: Network::Production,
            // Chosen to be unlikely to occur in normal data or text.
            message_start: [0x05, 0x22, 0x53, 0x07],
            default_port: 11517,
            rpc_port: 17515,
            proof_of_work_limit,
            alert_key: &PRODUCTION_ALERT_KEY,
            base58_prefixes: PRODUCTION_BASE58,
            genesis_block,
            genesis_hash,
            fixed_seeds: timestamped_seeds(seeds::PRODUCTION_SEEDS),
            dns_seeds: &[DnsSeed {
                name: "greencoin.crypto-expert.com",
                host: "greencoin.crypto-expert.com",
            }],
            data_dir_suffix: "",
            last_pow_height: Some(10_000),
            require_rpc_password: true,
        };
        debug!(network = %params.network, "parameter set constructed");
        params
    }

    /// Build the test-network parameter set: production plus overrides.
    pub fn testnet() -> Self {
        let mut params = Self::production();
        params.network = Network::TestNet;
        params.message_start = [0xfe, 0x0c, 0x2f, 0xdc];
        params.proof_of_work_limit = U256::MAX >> 16;
        params.alert_key = &TESTNET_ALERT_KEY;
        params.default_port = 25713;
        params.rpc_port = 25712;
        params.data_dir_suffix = "testnet";
        params.base58_prefixes = TESTNET_BASE58;

        let genesis_block = genesis::build(&GenesisConstants {
            time: 1450199186,
            bits: compact_from_target(params.proof_of_work_limit),
            nonce: 57246,
            coinbase_time: GENESIS_COINBASE_TIME,
            payload: GENESIS_COINBASE_PAYLOAD,
        });
        params.genesis_hash = genesis::verify(
            Network::TestNet,
            &genesis_block,
            TESTNET_GENESIS_HASH,
            GENESIS_MERKLE_ROOT,
        );
        params.genesis_block = genesis_block;

        params.fixed_seeds = timestamped_seeds(seeds::TESTNET_SEEDS);
        // The test network has no DNS seeds.
        params.dns_seeds = &[];

        debug!(network = %params.network, "parameter set constructed");
        params
    }

    /// Build the regression-test parameter set: testnet plus overrides.
    pub fn regtest() -> Self {
        let mut params = Self::testnet();
        params.network = Network::RegTest;
        params.message_start = [0xad, 0x5b, 0xfb, 0xaf];
        // Trivial difficulty: a handful of hash attempts finds a block.
        params.proof_of_work_limit = U256::MAX >> 5;

        let genesis_block = genesis::build(&GenesisConstants {
            time: 1450199187,
            bits: compact_from_target(params.proof_of_work_limit),
            nonce: 33,
            coinbase_time: GENESIS_COINBASE_TIME,
            payload: GENESIS_COINBASE_PAYLOAD,
        });
        params.genesis_hash = genesis::verify(
            Network::RegTest,
            &genesis_block,
            REGTEST_GENESIS_HASH,
            GENESIS_MERKLE_ROOT,
        );
        params.genesis_block = genesis_block;

        params.default_port = 18555;
        params.data_dir_suffix = "regtest";
        // Regtest never talks to DNS and never dials bootstrap peers.
        params.dns_seeds = &[];
        params.fixed_seeds = Vec::new();
        params.require_rpc_password = false;

        debug!(network = %params.network, "parameter set constructed");
        params
    }

    /// Base58 version prefix for a role on this network.
    pub fn base58_prefix(&self, role: Base58Role) -> &'static [u8] {
        self.base58_prefixes.prefix(role)
    }
}
