use async_trait::async_trait;
use crate::bencode::structs::metainfo::Metainfo;
use crate::tracker::structs::info_hash::InfoHash;

/// Backing store consulted when a torrent is not in the in-memory cache.
#[async_trait]
pub trait TorrentStore: Send + Sync {
    async fn find_by_info_hash(&self, info_hash: &InfoHash) -> Option<Metainfo>;
}
