use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub torrents: i64,
    pub torrents_unloaded: i64,
    pub tcp4_announces_handled: i64,
    pub tcp6_announces_handled: i64,
    pub invalid_requests: i64,
    pub users_not_found: i64,
    pub authentication_failures: i64,
    pub torrents_not_found: i64,
    pub malformed_stats: i64,
    pub peers_reaped: i64,
}
