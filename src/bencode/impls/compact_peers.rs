use std::net::{IpAddr, SocketAddr};
use crate::bencode::structs::compact_peers::CompactPeers;
use crate::tracker::structs::torrent_peer::TorrentPeer;

pub const COMPACT_PEER_SIZE: usize = 6;
pub const COMPACT_PEER6_SIZE: usize = 18;

impl CompactPeers {
    pub fn from_peers(peers: &[TorrentPeer]) -> CompactPeers
    {
        let mut compact = CompactPeers {
            peers: Vec::with_capacity(peers.len() * COMPACT_PEER_SIZE),
            peers6: Vec::new(),
        };
        for peer in peers {
            compact.push(peer.peer_addr);
        }
        compact
    }

    /// IPv4-mapped IPv6 addresses are packed as plain IPv4.
    pub fn push(&mut self, peer_addr: SocketAddr)
    {
        match peer_addr.ip() {
            IpAddr::V4(ip) => {
                self.peers.extend_from_slice(&u32::from(ip).to_be_bytes());
                self.peers.extend_from_slice(&peer_addr.port().to_be_bytes());
            }
            IpAddr::V6(ip) => match ip.to_ipv4_mapped() {
                Some(ip4) => {
                    self.peers.extend_from_slice(&u32::from(ip4).to_be_bytes());
                    self.peers.extend_from_slice(&peer_addr.port().to_be_bytes());
                }
                None => {
                    self.peers6.extend_from_slice(&u128::from(ip).to_be_bytes());
                    self.peers6.extend_from_slice(&peer_addr.port().to_be_bytes());
                }
            }
        }
    }

    pub fn len(&self) -> usize
    {
        self.peers.len() / COMPACT_PEER_SIZE + self.peers6.len() / COMPACT_PEER6_SIZE
    }

    pub fn is_empty(&self) -> bool
    {
        self.peers.is_empty() && self.peers6.is_empty()
    }
}
