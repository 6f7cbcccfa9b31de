use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Key the announce tags are signed with.
    pub shared_key: String,
    /// Seconds advertised as `interval`; twice this is the peer staleness threshold.
    pub request_interval: u64,
    /// Seconds advertised as `min interval`.
    pub request_interval_minimum: u64,
    /// Peers returned when the client omits `numwant` or sends zero.
    pub default_numwant: u64,
    pub max_numwant: u64,
    pub peers_cleanup_interval: u64,
    #[serde(default)]
    pub torrents_dir: Option<String>,
}
