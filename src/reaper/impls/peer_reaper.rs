use std::sync::Arc;
use std::time::Duration;
use log::{debug, info};
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::common::traits::clock::Clock;
use crate::reaper::structs::peer_reaper::PeerReaper;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl PeerReaper {
    pub fn new(threshold: Duration, clock: Arc<dyn Clock>) -> PeerReaper
    {
        PeerReaper { threshold, clock }
    }

    /// Reaper using the tracker's clock and its `2 × interval` threshold.
    pub fn for_tracker(tracker: &TorrentTracker) -> PeerReaper
    {
        PeerReaper::new(tracker.staleness_threshold(), tracker.clock.clone())
    }

    /// One scan and evict cycle; returns the number of peers removed.
    pub fn reap(&self, torrent: &Torrent) -> usize
    {
        let Some(cutoff) = self.clock.now().checked_sub(self.threshold) else {
            return 0;
        };

        let stale = torrent.peers.stale_peers(cutoff);
        if stale.is_empty() {
            return 0;
        }

        let removed = torrent.peers.remove_stale(&stale, cutoff);
        debug!("[REAPER] Removed {} of {} stale peers from {}", removed, stale.len(), torrent.info_hash);
        removed
    }

    /// Reaps `torrent` on a background task without waiting for it.
    pub fn reap_torrent(&self, torrent: Arc<Torrent>)
    {
        let reaper = self.clone();
        tokio::spawn(async move {
            reaper.reap(&torrent);
        });
    }

    /// Reaps every cached torrent once; returns the number of peers removed.
    pub fn reap_all(&self, tracker: &TorrentTracker) -> usize
    {
        let removed: usize = tracker.torrents_sharding.torrents()
            .iter()
            .map(|torrent| self.reap(torrent))
            .sum();
        if removed > 0 {
            tracker.update_stats(StatsEvent::PeersReaped, removed as i64);
        }
        removed
    }

    /// Reaps every `peers_cleanup_interval` seconds until `shutdown` flips to `true`.
    pub async fn run(self, tracker: Arc<TorrentTracker>, mut shutdown: watch::Receiver<bool>)
    {
        let interval = Duration::from_secs(tracker.config.tracker_config.peers_cleanup_interval);
        info!("[REAPER] Reaping peers idle for more than {:?} every {:?}", self.threshold, interval);

        loop {
            if shutdown_waiting(interval, &mut shutdown).await {
                break;
            }
            let removed = self.reap_all(&tracker);
            info!("[REAPER] Cycle done, {} peers removed over {} torrents", removed, tracker.torrents_sharding.len());
        }

        info!("[REAPER] Stopped");
    }
}
