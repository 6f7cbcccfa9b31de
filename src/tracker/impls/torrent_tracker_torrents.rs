use std::sync::Arc;
use log::{debug, info};
use crate::bencode::structs::metainfo::Metainfo;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Cached torrent for `info_hash`, loading it from the torrent store on a miss.
    ///
    /// Concurrent misses for the same torrent converge on one cached entry.
    pub async fn get_or_load_torrent(&self, info_hash: &InfoHash) -> Option<Arc<Torrent>>
    {
        if let Some(torrent) = self.torrents_sharding.get(info_hash) {
            return Some(torrent);
        }

        let metainfo = self.torrent_store.find_by_info_hash(info_hash).await?;
        debug!("[TORRENTS] Cache miss, loaded {} from store", info_hash);
        Some(self.cache_torrent(metainfo))
    }

    /// Puts a torrent into the cache, keeping the existing entry if there is one.
    pub fn cache_torrent(&self, metainfo: Metainfo) -> Arc<Torrent>
    {
        let candidate = Arc::new(Torrent::new(metainfo, self.clock.clone()));
        let cached = self.torrents_sharding.get_or_insert(candidate.clone());
        if Arc::ptr_eq(&cached, &candidate) {
            self.update_stats(StatsEvent::Torrents, 1);
        }
        cached
    }

    /// Drops a torrent and its swarm from the cache.
    pub fn unload_torrent(&self, info_hash: &InfoHash) -> bool
    {
        match self.torrents_sharding.remove(info_hash) {
            None => false,
            Some(torrent) => {
                info!("[TORRENTS] Unloaded {} with {} peers", info_hash, torrent.peers.len());
                self.update_stats(StatsEvent::Torrents, -1);
                self.update_stats(StatsEvent::TorrentsUnloaded, 1);
                true
            }
        }
    }
}
