//! # GC Chain Params
//!
//! Chain parameter registry: the immutable consensus and bootstrapping
//! constants a GreenCoin node must agree on with its peers, for each of the
//! three supported networks.
//!
//! ## Components
//!
//! - **Domain Layer** (`domain/`): pure data and computation, no I/O
//!   - `ChainParams`: one fully populated parameter set per network, built by
//!     an explicit copy-and-override chain Production → TestNet → RegTest
//!   - genesis construction and self-verification (hash and merkle root are
//!     checked against hard-coded constants at build time; a mismatch aborts
//!     the process)
//!   - fixed-seed bootstrapping (compiled-in address tables → timestamped
//!     peer records)
//!   - the minimal block/transaction model and wire encoding the genesis
//!     hashes are defined over
//!
//! - **Selector** (`selector.rs`): pre-built per-network singletons and the
//!   `NetworkSelector` context value that the rest of the node reads the
//!   active parameter set through
//!
//! ## Invariants
//!
//! - Every `ChainParams` satisfies `genesis_hash == genesis_block.header.hash()`
//!   from the moment it is constructed. This is verified eagerly and fatally.
//! - Parameter sets are immutable after construction; concurrent reads need
//!   no locking.
//! - The active-network reference is never null and always points at one of
//!   the three pre-built sets.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod selector;

// Re-exports
pub use domain::block::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};
pub use domain::params::{Base58Prefixes, Base58Role, ChainParams, DnsSeed, Network};
pub use domain::seeds::{timestamped_seeds, SeedAddress, SeedSpec};
pub use domain::value_objects::Hash256;
pub use selector::{params, NetworkSelector, SelectionError};
