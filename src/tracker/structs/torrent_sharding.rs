//! Sharded torrent cache.

use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory cache of loaded torrents, split over 256 shards.
///
/// The shard of a torrent is the first byte of its info hash. Each shard has
/// its own lock, so lookups of unrelated torrents never contend. Entries are
/// `Arc<Torrent>`: handlers and the reaper keep using a torrent they already
/// hold even if it is unloaded meanwhile.
///
/// # Example
///
/// ```rust,ignore
/// use private_tracker::tracker::structs::torrent_sharding::TorrentSharding;
///
/// let sharding = TorrentSharding::new();
/// let torrent = sharding.get_or_insert(Arc::new(torrent));
/// assert_eq!(sharding.len(), 1);
/// ```
#[derive(Debug)]
pub struct TorrentSharding {
    pub shards: [Arc<RwLock<BTreeMap<InfoHash, Arc<Torrent>>>>; 256],
}
