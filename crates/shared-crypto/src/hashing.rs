//! # Consensus Hashing
//!
//! SHA-256d for transaction ids and merkle trees, scrypt for block headers.
//!
//! The scrypt parameters (N=1024, r=1, p=1, 32-byte output, password = salt =
//! input) are consensus constants: every block hash on every GreenCoin network
//! is defined by them. They must never change.

use std::sync::LazyLock;

use scrypt::Params;
use sha2::{Digest, Sha256};

/// 256-bit hash output.
pub type Hash = [u8; 32];

/// scrypt cost parameter N as log2 (N = 1024).
const SCRYPT_LOG_N: u8 = 10;
/// scrypt block size parameter.
const SCRYPT_R: u32 = 1;
/// scrypt parallelization parameter.
const SCRYPT_P: u32 = 1;

// Parameter validation happens once; the values are compile-time constants
// known to be accepted by the scrypt crate.
static SCRYPT_PARAMS: LazyLock<Params> = LazyLock::new(|| {
    Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32).expect("fixed scrypt parameters are valid")
});

/// Double SHA-256 (one-shot).
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// SHA-256d over the concatenation of two hashes.
///
/// This is the merkle-tree combining step: parent = SHA-256d(left || right).
pub fn sha256d_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let first = hasher.finalize();
    Sha256::digest(first).into()
}

/// scrypt block hash (one-shot).
///
/// The input is used as both password and salt, matching the reference
/// `scrypt_1024_1_1_256` construction used for block header hashing.
pub fn scrypt_hash(data: &[u8]) -> Hash {
    let mut output = [0u8; 32];
    scrypt::scrypt(data, data, &SCRYPT_PARAMS, &mut output)
        .expect("32-byte output length is valid");
    output
}
