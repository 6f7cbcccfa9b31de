use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use parking_lot::RwLock;
use crate::common::traits::clock::Clock;
use crate::tracker::enums::stats_error::StatsError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_map::PeerMap;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::types::ahash_map::AHashMap;

/// Peers returned when the client asks for zero.
pub const DEFAULT_NUMWANT: usize = 50;

impl PeerMap {
    pub fn new(clock: Arc<dyn Clock>) -> PeerMap
    {
        PeerMap {
            peers: RwLock::new(AHashMap::default()),
            cursor: AtomicUsize::new(0),
            clock,
        }
    }

    pub fn now(&self) -> Instant
    {
        self.clock.now()
    }

    /// Registers a fresh peer or refreshes address, secret and `last_seen` of a known one.
    pub fn upsert(&self, peer_id: PeerId, peer_addr: SocketAddr, secret: &str)
    {
        let now = self.clock.now();
        let mut lock = self.peers.write();
        match lock.get_mut(&peer_id) {
            Some(peer) => peer.refresh(peer_addr, secret, now),
            None => {
                let peer = TorrentPeer::new(peer_id.clone(), peer_addr, secret, now);
                lock.insert(peer_id, peer);
            }
        }
    }

    /// Applies reported counters to a registered peer.
    ///
    /// Parsing happens before the lock is taken, so a malformed value leaves
    /// the peer untouched.
    pub fn update_stats(&self, peer_id: &PeerId, uploaded: &str, downloaded: &str, left: &str) -> Result<(), StatsError>
    {
        let stats = PeerStats::parse(uploaded, downloaded, left)?;
        self.apply_stats(peer_id, &stats)
    }

    /// Applies already parsed counters to a registered peer.
    pub fn apply_stats(&self, peer_id: &PeerId, stats: &PeerStats) -> Result<(), StatsError>
    {
        let now = self.clock.now();
        let mut lock = self.peers.write();
        let peer = lock.get_mut(peer_id).ok_or(StatsError::PeerNotFound)?;
        peer.apply_stats(stats, now);
        Ok(())
    }

    /// `(seeders, leechers)`; peers without statistics count as leechers.
    pub fn enumerate(&self) -> (u64, u64)
    {
        let lock = self.peers.read();
        let seeders = lock.values().filter(|peer| peer.is_seeder()).count() as u64;
        (seeders, lock.len() as u64 - seeders)
    }

    /// Up to `count` distinct peers, or `DEFAULT_NUMWANT` when `count` is zero.
    ///
    /// Consecutive calls start where the previous one stopped, so repeated
    /// announces on a large swarm rotate through every peer.
    pub fn sample(&self, count: i64) -> Vec<TorrentPeer>
    {
        if count < 0 {
            return Vec::new();
        }
        let wanted = if count == 0 { DEFAULT_NUMWANT } else { count as usize };

        let lock = self.peers.read();
        let amount = wanted.min(lock.len());
        if amount == 0 {
            return Vec::new();
        }
        let start = self.cursor.fetch_add(amount, Ordering::Relaxed) % lock.len();
        lock.values().cycle().skip(start).take(amount).cloned().collect()
    }

    pub fn get(&self, peer_id: &PeerId) -> Option<TorrentPeer>
    {
        self.peers.read().get(peer_id).cloned()
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool
    {
        self.peers.read().contains_key(peer_id)
    }

    pub fn len(&self) -> usize
    {
        self.peers.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.peers.read().is_empty()
    }

    /// Deletes the given peers outright, returning how many were present.
    pub fn remove_all(&self, peer_ids: &[PeerId]) -> usize
    {
        if peer_ids.is_empty() {
            return 0;
        }
        let mut lock = self.peers.write();
        peer_ids.iter().filter(|peer_id| lock.remove(*peer_id).is_some()).count()
    }

    /// Ids of peers last seen before `cutoff`.
    pub fn stale_peers(&self, cutoff: Instant) -> Vec<PeerId>
    {
        self.peers.read()
            .values()
            .filter(|peer| peer.last_seen < cutoff)
            .map(|peer| peer.peer_id.clone())
            .collect()
    }

    /// Like `remove_all`, but keeps any peer that announced again after `cutoff`.
    pub fn remove_stale(&self, peer_ids: &[PeerId], cutoff: Instant) -> usize
    {
        if peer_ids.is_empty() {
            return 0;
        }
        let mut lock = self.peers.write();
        let mut removed = 0;
        for peer_id in peer_ids {
            if lock.get(peer_id).is_some_and(|peer| peer.last_seen < cutoff) {
                lock.remove(peer_id);
                removed += 1;
            }
        }
        removed
    }
}
