use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::bencode::structs::metainfo::Metainfo;
use crate::tracker::structs::info_hash::InfoHash;

/// Torrent metainfo kept in memory, optionally seeded from a directory of `.torrent` files.
#[derive(Debug, Default)]
pub struct MemoryTorrentStore {
    pub(crate) torrents: RwLock<BTreeMap<InfoHash, Metainfo>>,
}
