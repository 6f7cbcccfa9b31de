use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            torrents: AtomicI64::new(0),
            torrents_unloaded: AtomicI64::new(0),
            tcp4_announces_handled: AtomicI64::new(0),
            tcp6_announces_handled: AtomicI64::new(0),
            invalid_requests: AtomicI64::new(0),
            users_not_found: AtomicI64::new(0),
            authentication_failures: AtomicI64::new(0),
            torrents_not_found: AtomicI64::new(0),
            malformed_stats: AtomicI64::new(0),
            peers_reaped: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
