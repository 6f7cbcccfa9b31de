use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding
    {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    pub fn shard(&self, info_hash: &InfoHash) -> &Arc<RwLock<BTreeMap<InfoHash, Arc<Torrent>>>>
    {
        &self.shards[info_hash.0[0] as usize]
    }

    pub fn get(&self, info_hash: &InfoHash) -> Option<Arc<Torrent>>
    {
        self.shard(info_hash).read().get(info_hash).cloned()
    }

    pub fn contains(&self, info_hash: &InfoHash) -> bool
    {
        self.shard(info_hash).read().contains_key(info_hash)
    }

    /// Inserts `torrent` unless one with the same info hash is already cached,
    /// and returns whichever ends up in the cache.
    pub fn get_or_insert(&self, torrent: Arc<Torrent>) -> Arc<Torrent>
    {
        let mut lock = self.shard(&torrent.info_hash).write();
        lock.entry(torrent.info_hash).or_insert(torrent).clone()
    }

    pub fn remove(&self, info_hash: &InfoHash) -> Option<Arc<Torrent>>
    {
        self.shard(info_hash).write().remove(info_hash)
    }

    /// Snapshot of every cached torrent.
    pub fn torrents(&self) -> Vec<Arc<Torrent>>
    {
        let mut torrents = Vec::with_capacity(self.len());
        for shard in self.shards.iter() {
            torrents.extend(shard.read().values().cloned());
        }
        torrents
    }

    pub fn len(&self) -> usize
    {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }
}
