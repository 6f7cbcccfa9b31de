use std::net::SocketAddr;
use std::time::Instant;
use crate::tracker::enums::peer_status::PeerStatus;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    pub fn new(peer_id: PeerId, peer_addr: SocketAddr, secret: &str, now: Instant) -> TorrentPeer
    {
        TorrentPeer {
            peer_id,
            peer_addr,
            status: PeerStatus::Quasi,
            uploaded: 0,
            downloaded: 0,
            prior_downloaded: 0,
            left: None,
            last_seen: now,
            secret: secret.to_string(),
        }
    }

    pub fn refresh(&mut self, peer_addr: SocketAddr, secret: &str, now: Instant)
    {
        self.peer_addr = peer_addr;
        if self.secret != secret {
            self.secret = secret.to_string();
        }
        self.last_seen = now;
    }

    pub fn apply_stats(&mut self, stats: &PeerStats, now: Instant)
    {
        if self.left.is_none() {
            self.prior_downloaded = stats.downloaded;
        } else {
            self.prior_downloaded = self.downloaded;
        }
        self.downloaded = stats.downloaded;
        self.uploaded = stats.uploaded;
        self.left = Some(stats.left);
        self.status = if stats.left == 0 { PeerStatus::Seeding } else { PeerStatus::Leeching };
        self.last_seen = now;
    }

    pub fn is_seeder(&self) -> bool
    {
        self.status == PeerStatus::Seeding
    }

    /// Bytes downloaded since the previous announce.
    pub fn downloaded_delta(&self) -> u64
    {
        self.downloaded.saturating_sub(self.prior_downloaded)
    }
}
