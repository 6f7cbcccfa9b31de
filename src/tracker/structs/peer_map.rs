use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use parking_lot::RwLock;
use crate::common::traits::clock::Clock;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::types::ahash_map::AHashMap;

/// The peer registry of one torrent.
///
/// A single `RwLock` guards the whole map: readers (`enumerate`, `sample`,
/// `stale_peers`) run side by side, while every mutation takes the write
/// lock for the duration of one call, so no reader sees a half-applied peer.
///
/// `cursor` is the round-robin offset used by `sample`.
pub struct PeerMap {
    pub(crate) peers: RwLock<AHashMap<PeerId, TorrentPeer>>,
    pub(crate) cursor: AtomicUsize,
    pub(crate) clock: Arc<dyn Clock>,
}

impl fmt::Debug for PeerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerMap").field("peers", &self.peers.read().len()).finish()
    }
}
