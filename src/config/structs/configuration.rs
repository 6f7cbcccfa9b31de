use serde::{Deserialize, Serialize};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::user_config::UserConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub http_server: Vec<HttpTrackersConfig>,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}
