//! Minimal block and transaction model.
//!
//! Just enough of the chain's data structures to reconstruct a genesis block
//! and compute the hashes the registry verifies itself against: canonical
//! wire encoding (little-endian integers, compact-size counts), transaction
//! ids, merkle roots, and the scrypt header hash.
//!
//! Transactions carry their own timestamp, serialized directly after the
//! version field; it participates in the txid like every other field.

use shared_crypto::hashing::{scrypt_hash, sha256d, sha256d_pair};

use super::value_objects::Hash256;

/// Sequence value marking an input as final.
pub const FINAL_SEQUENCE: u32 = u32::MAX;

/// Append a compact-size count: one byte below 0xfd, otherwise a marker byte
/// followed by the little-endian value.
fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Reference to a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    /// Id of the transaction holding the output.
    pub txid: Hash256,
    /// Index of the output within that transaction.
    pub index: u32,
}

impl OutPoint {
    /// The canonical null reference used by coinbase inputs: all-zero txid,
    /// maximum index.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            index: u32::MAX,
        }
    }

    /// Whether this is the null coinbase reference.
    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.txid.as_bytes());
        buf.extend_from_slice(&self.index.to_le_bytes());
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Output being spent; the null reference for coinbase inputs.
    pub previous_output: OutPoint,
    /// Redeem script. Coinbase inputs carry arbitrary payload bytes here.
    pub script_sig: Vec<u8>,
    /// Sequence number.
    pub sequence: u32,
}

impl TxIn {
    fn serialize_into(&self, buf: &mut Vec<u8>) {
        self.previous_output.serialize_into(buf);
        write_compact_size(buf, self.script_sig.len() as u64);
        buf.extend_from_slice(&self.script_sig);
        buf.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Amount in base units.
    pub value: u64,
    /// Claiming script; empty means unspendable.
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    /// An empty, unspendable output (zero value, no claimable script).
    pub const fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Vec::new(),
        }
    }

    /// Whether this output is the empty, unspendable form.
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }

    fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value.to_le_bytes());
        write_compact_size(buf, self.script_pubkey.len() as u64);
        buf.extend_from_slice(&self.script_pubkey);
    }
}

/// A transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Format version.
    pub version: i32,
    /// Transaction timestamp (Unix seconds).
    pub time: u32,
    /// Inputs.
    pub inputs: Vec<TxIn>,
    /// Outputs.
    pub outputs: Vec<TxOut>,
    /// Earliest time or height the transaction may enter a block.
    pub lock_time: u32,
}

impl Transaction {
    /// Canonical wire encoding.
    pub fn serialized(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.extend_from_slice(&self.time.to_le_bytes());
        write_compact_size(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            input.serialize_into(&mut buf);
        }
        write_compact_size(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            output.serialize_into(&mut buf);
        }
        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    /// Transaction id: SHA-256d of the wire encoding.
    pub fn txid(&self) -> Hash256 {
        Hash256::from_bytes(sha256d(&self.serialized()))
    }
}

/// Block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Format version.
    pub version: i32,
    /// Hash of the preceding block; all-zero for genesis.
    pub previous_block: Hash256,
    /// Merkle root over the block's transactions.
    pub merkle_root: Hash256,
    /// Block timestamp (Unix seconds).
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Canonical 80-byte wire encoding.
    pub fn serialized(&self) -> [u8; 80] {
        let mut buf = [0u8; 80];
        buf[0..4].copy_from_slice(&self.version.to_le_bytes());
        buf[4..36].copy_from_slice(self.previous_block.as_bytes());
        buf[36..68].copy_from_slice(self.merkle_root.as_bytes());
        buf[68..72].copy_from_slice(&self.time.to_le_bytes());
        buf[72..76].copy_from_slice(&self.bits.to_le_bytes());
        buf[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        buf
    }

    /// Block hash: scrypt over the 80-byte encoding.
    pub fn hash(&self) -> Hash256 {
        Hash256::from_bytes(scrypt_hash(&self.serialized()))
    }
}

/// A block: header plus transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Header.
    pub header: BlockHeader,
    /// Transactions, coinbase first.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Merkle root over this block's transaction ids.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root_from_txids(&txids)
    }
}

/// Merkle root of a list of transaction ids: pairwise SHA-256d, the last
/// entry of an odd layer paired with itself. Zero for an empty list.
pub fn merkle_root_from_txids(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return Hash256::ZERO;
    }
    let mut layer: Vec<Hash256> = txids.to_vec();
    while layer.len() > 1 {
        layer = layer
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = if pair.len() == 2 { pair[1] } else { pair[0] };
                Hash256::from_bytes(sha256d_pair(left.as_bytes(), right.as_bytes()))
            })
            .collect();
    }
    layer[0]
}
