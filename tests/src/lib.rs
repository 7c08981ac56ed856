//! # GreenCoin Test Suite
//!
//! Unified test crate for cross-crate behavior.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── chain_params.rs       # Parameter sets, genesis verification, seeds
//!     └── network_selection.rs  # Selector state machine
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gc-tests
//! ```

pub mod integration;
