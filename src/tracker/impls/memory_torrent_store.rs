use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use async_trait::async_trait;
use log::{info, warn};
use parking_lot::RwLock;
use crate::bencode::structs::metainfo::Metainfo;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::memory_torrent_store::MemoryTorrentStore;
use crate::tracker::traits::torrent_store::TorrentStore;

impl MemoryTorrentStore {
    pub fn new() -> MemoryTorrentStore
    {
        MemoryTorrentStore {
            torrents: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn insert(&self, metainfo: Metainfo) -> InfoHash
    {
        let info_hash = metainfo.info_hash;
        self.torrents.write().insert(info_hash, metainfo);
        info_hash
    }

    pub fn remove(&self, info_hash: &InfoHash) -> Option<Metainfo>
    {
        self.torrents.write().remove(info_hash)
    }

    pub fn len(&self) -> usize
    {
        self.torrents.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.torrents.read().is_empty()
    }

    /// Registers every `*.torrent` file found directly in `path`.
    ///
    /// Files that fail to decode are skipped with a warning; an unreadable
    /// directory is an error.
    pub fn load_dir<P: AsRef<Path>>(&self, path: P) -> Result<usize, CustomError>
    {
        let path = path.as_ref();
        let entries = fs::read_dir(path)
            .map_err(|e| CustomError::new(&format!("unable to read torrents directory {}: {}", path.display(), e)))?;

        let mut loaded = 0;
        for entry in entries.flatten() {
            let file = entry.path();
            if file.extension().and_then(|ext| ext.to_str()) != Some("torrent") {
                continue;
            }
            let data = match fs::read(&file) {
                Ok(data) => data,
                Err(e) => {
                    warn!("[TORRENTS] Unable to read {}: {}", file.display(), e);
                    continue;
                }
            };
            match Metainfo::decode(&data) {
                Ok(metainfo) => {
                    let info_hash = self.insert(metainfo);
                    info!("[TORRENTS] Loaded {} from {}", info_hash, file.display());
                    loaded += 1;
                }
                Err(e) => {
                    warn!("[TORRENTS] Skipping {}: {}", file.display(), e);
                }
            }
        }
        Ok(loaded)
    }
}

#[async_trait]
impl TorrentStore for MemoryTorrentStore {
    async fn find_by_info_hash(&self, info_hash: &InfoHash) -> Option<Metainfo>
    {
        self.torrents.read().get(info_hash).cloned()
    }
}
