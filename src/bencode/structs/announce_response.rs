use crate::bencode::structs::compact_peers::CompactPeers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResponse {
    pub interval: i64,
    pub min_interval: i64,
    pub complete: u64,
    pub incomplete: u64,
    pub peers: CompactPeers,
}
