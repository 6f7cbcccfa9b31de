use crate::bencode::structs::metainfo::Metainfo;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_map::PeerMap;

/// A tracked torrent: its immutable metainfo and the registry of its swarm.
///
/// The registry is owned by the torrent and dropped with it.
#[derive(Debug)]
pub struct Torrent {
    pub info_hash: InfoHash,
    pub metainfo: Metainfo,
    pub peers: PeerMap,
}
