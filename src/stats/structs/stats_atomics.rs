use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub torrents: AtomicI64,
    pub torrents_unloaded: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub invalid_requests: AtomicI64,
    pub users_not_found: AtomicI64,
    pub authentication_failures: AtomicI64,
    pub torrents_not_found: AtomicI64,
    pub malformed_stats: AtomicI64,
    pub peers_reaped: AtomicI64,
}
