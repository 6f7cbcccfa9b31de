/// Transfer counters as reported by a client on announce.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct PeerStats {
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
}
