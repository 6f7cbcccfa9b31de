use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::security::structs::secret_verifier::SecretVerifier;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::traits::stat_publish::StatPublish;
use crate::tracker::traits::torrent_store::TorrentStore;
use crate::tracker::traits::user_lookup::UserLookup;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(
        config: Arc<Configuration>,
        users: Arc<dyn UserLookup>,
        torrent_store: Arc<dyn TorrentStore>,
        stat_publisher: Option<Arc<dyn StatPublish>>,
    ) -> TorrentTracker
    {
        Self::with_clock(config, users, torrent_store, stat_publisher, Arc::new(SystemClock))
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn with_clock(
        config: Arc<Configuration>,
        users: Arc<dyn UserLookup>,
        torrent_store: Arc<dyn TorrentStore>,
        stat_publisher: Option<Arc<dyn StatPublish>>,
        clock: Arc<dyn Clock>,
    ) -> TorrentTracker
    {
        TorrentTracker {
            verifier: SecretVerifier::new(&config.tracker_config.shared_key),
            config,
            torrents_sharding: Arc::new(TorrentSharding::new()),
            stats: Arc::new(StatsAtomics::new()),
            users,
            torrent_store,
            stat_publisher,
            clock,
        }
    }

    /// Peers idle for longer than this are reaped.
    pub fn staleness_threshold(&self) -> Duration
    {
        self.config.staleness_threshold()
    }
}

impl fmt::Debug for TorrentTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TorrentTracker")
            .field("torrents", &self.torrents_sharding.len())
            .field("stat_publisher", &self.stat_publisher.is_some())
            .finish()
    }
}
