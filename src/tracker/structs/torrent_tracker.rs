use std::sync::Arc;
use crate::common::traits::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::security::structs::secret_verifier::SecretVerifier;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::traits::stat_publish::StatPublish;
use crate::tracker::traits::torrent_store::TorrentStore;
use crate::tracker::traits::user_lookup::UserLookup;

/// The tracker: torrent cache, collaborators and counters shared by every request.
///
/// User and torrent lookups and the optional stat sink are supplied once at
/// construction.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    pub stats: Arc<StatsAtomics>,
    pub verifier: SecretVerifier,
    pub users: Arc<dyn UserLookup>,
    pub torrent_store: Arc<dyn TorrentStore>,
    pub stat_publisher: Option<Arc<dyn StatPublish>>,
    pub clock: Arc<dyn Clock>,
}
