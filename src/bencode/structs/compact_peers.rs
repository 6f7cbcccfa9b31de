/// Peers packed back to back: 6 bytes per IPv4 peer in `peers`, 18 bytes
/// per IPv6 peer in `peers6`. Addresses and ports are big-endian.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactPeers {
    pub peers: Vec<u8>,
    pub peers6: Vec<u8>,
}
