//! Active-network selection.
//!
//! The three parameter sets are built lazily as process-lifetime singletons,
//! in dependency order (TestNet copies Production, RegTest copies TestNet).
//! A `NetworkSelector` is an explicit context value holding a non-owning
//! reference to the active set; node initialization creates one, applies the
//! operator's network flags, and threads it to every consumer. Selection is
//! expected to happen once, before any worker threads start; afterwards the
//! sets are read-only and need no locking.

use std::sync::LazyLock;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::params::{ChainParams, Network};

static PRODUCTION: LazyLock<ChainParams> = LazyLock::new(ChainParams::production);
static TESTNET: LazyLock<ChainParams> = LazyLock::new(ChainParams::testnet);
static REGTEST: LazyLock<ChainParams> = LazyLock::new(ChainParams::regtest);

/// Recoverable network-selection errors.
///
/// Distinct from the fatal genesis-consistency check: these are operator
/// configuration mistakes, reported to the caller so it can surface them
/// and halt startup cleanly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Both the test network and the regression-test network were requested.
    #[error("conflicting network selection: testnet and regtest are mutually exclusive")]
    ConflictingNetworks,
}

/// The pre-built parameter-set singleton for a network.
///
/// The first call for a network builds (and self-verifies) its set; later
/// calls return the same reference.
pub fn params(network: Network) -> &'static ChainParams {
    match network {
        Network::Production => &PRODUCTION,
        Network::TestNet => &TESTNET,
        Network::RegTest => &REGTEST,
    }
}

/// Context value tracking which network this process runs on.
///
/// Starts on Production. Never owns a parameter set; it only points into
/// the fixed singletons.
#[derive(Debug, Clone)]
pub struct NetworkSelector {
    active: &'static ChainParams,
}

impl NetworkSelector {
    /// A selector with Production active.
    pub fn new() -> Self {
        Self {
            active: params(Network::Production),
        }
    }

    /// Switch to `network` unconditionally.
    ///
    /// Idempotent; nothing but the held reference changes.
    pub fn select(&mut self, network: Network) {
        self.active = params(network);
        info!(%network, "active network selected");
    }

    /// Derive and apply a network from the two operator intent flags.
    ///
    /// Requesting both testnet and regtest is a configuration error: the
    /// selector reports it and leaves the active network untouched.
    pub fn select_from_flags(
        &mut self,
        want_testnet: bool,
        want_regtest: bool,
    ) -> Result<Network, SelectionError> {
        if want_testnet && want_regtest {
            warn!("testnet and regtest both requested; refusing to select");
            return Err(SelectionError::ConflictingNetworks);
        }

        let target = if want_regtest {
            Network::RegTest
        } else if want_testnet {
            Network::TestNet
        } else {
            Network::Production
        };
        self.select(target);
        Ok(target)
    }

    /// The active parameter set.
    pub fn active(&self) -> &'static ChainParams {
        self.active
    }

    /// The active network's identifier.
    pub fn network(&self) -> Network {
        self.active.network
    }
}

impl Default for NetworkSelector {
    fn default() -> Self {
        Self::new()
    }
}
