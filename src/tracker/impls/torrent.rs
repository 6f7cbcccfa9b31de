use std::net::SocketAddr;
use std::sync::Arc;
use crate::bencode::structs::compact_peers::CompactPeers;
use crate::bencode::structs::metainfo::Metainfo;
use crate::common::traits::clock::Clock;
use crate::tracker::enums::stats_error::StatsError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_map::PeerMap;
use crate::tracker::structs::peer_stats::PeerStats;
use crate::tracker::structs::torrent::Torrent;

impl Torrent {
    pub fn new(metainfo: Metainfo, clock: Arc<dyn Clock>) -> Torrent
    {
        Torrent {
            info_hash: metainfo.info_hash,
            metainfo,
            peers: PeerMap::new(clock),
        }
    }

    pub fn add_peer(&self, peer_id: PeerId, peer_addr: SocketAddr, secret: &str)
    {
        self.peers.upsert(peer_id, peer_addr, secret);
    }

    pub fn update_stats_for(&self, peer_id: &PeerId, uploaded: &str, downloaded: &str, left: &str) -> Result<(), StatsError>
    {
        self.peers.update_stats(peer_id, uploaded, downloaded, left)
    }

    pub fn apply_stats_for(&self, peer_id: &PeerId, stats: &PeerStats) -> Result<(), StatsError>
    {
        self.peers.apply_stats(peer_id, stats)
    }

    pub fn enumerate_peers(&self) -> (u64, u64)
    {
        self.peers.enumerate()
    }

    /// Samples `numwant` peers and packs them in compact form.
    pub fn peer_list(&self, numwant: i64) -> CompactPeers
    {
        CompactPeers::from_peers(&self.peers.sample(numwant))
    }
}
