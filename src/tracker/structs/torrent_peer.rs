use std::net::SocketAddr;
use std::time::Instant;
use crate::tracker::enums::peer_status::PeerStatus;
use crate::tracker::structs::peer_id::PeerId;

/// One peer in a torrent's swarm.
///
/// `left` stays `None` until the first statistics update; until then the
/// peer is `PeerStatus::Quasi`. `prior_downloaded` holds the `downloaded`
/// value reported on the previous announce.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
    pub status: PeerStatus,
    pub uploaded: u64,
    pub downloaded: u64,
    pub prior_downloaded: u64,
    pub left: Option<u64>,
    pub last_seen: Instant,
    pub secret: String,
}
