//! Genesis block construction and self-verification.
//!
//! Each network's genesis block is rebuilt at startup from literal constants
//! and checked against its hard-coded expected hash and merkle root. The
//! nonce and timestamps were found by proof-of-work search when the chain
//! launched; nothing here mines, it only reconstructs a known-good block.
//!
//! A mismatch means the binary's embedded constants are internally
//! inconsistent. There is no safe recovery from that, so verification fails
//! by aborting the process rather than returning an error.

use tracing::debug;

use super::block::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut, FINAL_SEQUENCE};
use super::params::Network;
use super::value_objects::Hash256;

/// Marker value pushed ahead of the payload in the coinbase script.
const COINBASE_MARKER: u8 = 42;

/// Format version of the genesis header and coinbase.
const GENESIS_VERSION: i32 = 1;

/// Literal constants a network's genesis block is rebuilt from.
#[derive(Debug, Clone, Copy)]
pub struct GenesisConstants {
    /// Header timestamp (Unix seconds).
    pub time: u32,
    /// Compact difficulty target, derived from the network's proof-of-work
    /// limit.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
    /// Coinbase transaction timestamp (Unix seconds).
    pub coinbase_time: u32,
    /// Human-readable payload embedded in the coinbase script.
    pub payload: &'static [u8],
}

/// Push a short data element onto a script with a direct length prefix.
fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    debug_assert!(data.len() < 0x4c, "direct pushes only");
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}

/// Build a genesis block from its literal constants.
///
/// The single coinbase input spends the null outpoint and carries
/// `OP_0 <marker> <payload>` as its script; the single output is empty and
/// unspendable. The merkle root is computed, not assumed.
pub fn build(constants: &GenesisConstants) -> Block {
    let mut script_sig = Vec::with_capacity(constants.payload.len() + 4);
    script_sig.push(0x00); // OP_0
    push_data(&mut script_sig, &[COINBASE_MARKER]);
    push_data(&mut script_sig, constants.payload);

    let coinbase = Transaction {
        version: GENESIS_VERSION,
        time: constants.coinbase_time,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: FINAL_SEQUENCE,
        }],
        outputs: vec![TxOut::empty()],
        lock_time: 0,
    };

    let merkle_root = coinbase.txid();
    Block {
        header: BlockHeader {
            version: GENESIS_VERSION,
            previous_block: Hash256::ZERO,
            merkle_root,
            time: constants.time,
            bits: constants.bits,
            nonce: constants.nonce,
        },
        transactions: vec![coinbase],
    }
}

/// Verify a freshly built genesis block against its expected constants and
/// return the computed hash.
///
/// Aborts the process on any mismatch: a wrong genesis hash would not crash
/// later, it would silently place the node on an incompatible network.
pub fn verify(
    network: Network,
    block: &Block,
    expected_hash: Hash256,
    expected_merkle_root: Hash256,
) -> Hash256 {
    let merkle_root = block.compute_merkle_root();
    assert_eq!(
        merkle_root, expected_merkle_root,
        "{network} genesis merkle root mismatch (embedded constants are inconsistent)"
    );
    assert_eq!(
        block.header.merkle_root, merkle_root,
        "{network} genesis header carries a stale merkle root"
    );

    let hash = block.header.hash();
    assert_eq!(
        hash, expected_hash,
        "{network} genesis hash mismatch (embedded constants are inconsistent)"
    );

    debug!(%network, %hash, "genesis block verified");
    hash
}
