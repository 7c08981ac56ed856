//! Fixed-seed bootstrapping.
//!
//! Each network compiles in a small table of known peer addresses used only
//! for cold start. The table entries are converted into timestamped records
//! with a synthetic last-seen of one to two weeks ago: old enough that the
//! address manager deprioritizes them as soon as fresher addresses arrive
//! from live gossip, new enough that they are still dialed at all.

use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// One compiled-in bootstrap record: a 16-byte IPv6 (or IPv6-mapped IPv4)
/// address and a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    /// Raw address bytes.
    pub addr: [u8; 16],
    /// Peer port.
    pub port: u16,
}

/// A bootstrap peer candidate handed to the address manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    /// Peer address.
    pub addr: Ipv6Addr,
    /// Peer port.
    pub port: u16,
    /// Synthetic last-seen timestamp (Unix seconds).
    pub last_seen: u64,
}

impl SeedAddress {
    /// The address as a dialable socket address.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddrV6::new(self.addr, self.port, 0, 0).into()
    }
}

const fn ipv4_mapped(a: u8, b: u8, c: u8, d: u8) -> [u8; 16] {
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d]
}

/// Production bootstrap peers.
pub(crate) const PRODUCTION_SEEDS: &[SeedSpec] = &[
    SeedSpec { addr: ipv4_mapped(104, 236, 134, 71), port: 11517 },
    SeedSpec { addr: ipv4_mapped(45, 79, 148, 22), port: 11517 },
    SeedSpec { addr: ipv4_mapped(139, 59, 178, 105), port: 11517 },
    SeedSpec { addr: ipv4_mapped(163, 172, 145, 36), port: 11517 },
    SeedSpec { addr: ipv4_mapped(51, 15, 84, 209), port: 11517 },
    SeedSpec { addr: ipv4_mapped(94, 130, 97, 144), port: 11517 },
    SeedSpec { addr: ipv4_mapped(107, 170, 59, 196), port: 11517 },
    SeedSpec { addr: ipv4_mapped(188, 166, 44, 203), port: 11517 },
];

/// Test-network bootstrap peers.
pub(crate) const TESTNET_SEEDS: &[SeedSpec] = &[
    SeedSpec { addr: ipv4_mapped(104, 236, 180, 12), port: 25713 },
    SeedSpec { addr: ipv4_mapped(139, 59, 64, 88), port: 25713 },
    SeedSpec { addr: ipv4_mapped(46, 101, 210, 157), port: 25713 },
    SeedSpec { addr: ipv4_mapped(128, 199, 97, 41), port: 25713 },
];

/// Convert a compiled-in seed table into timestamped peer records.
///
/// Output length equals input length; each last-seen lies in
/// `[now - 2 weeks, now - 1 week]`. Successive calls draw fresh offsets.
pub fn timestamped_seeds(table: &[SeedSpec]) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let mut rng = rand::thread_rng();

    table
        .iter()
        .map(|seed| SeedAddress {
            addr: Ipv6Addr::from(seed.addr),
            port: seed.port,
            last_seen: now.saturating_sub(rng.gen_range(ONE_WEEK_SECS..=2 * ONE_WEEK_SECS)),
        })
        .collect()
}
