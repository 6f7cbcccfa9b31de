use std::net::SocketAddr;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A parsed announce.
///
/// The transfer counters stay textual until the handler parses them, which
/// happens before the peer registry is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub(crate) info_hash: InfoHash,
    pub(crate) peer_id: PeerId,
    pub(crate) peer_addr: SocketAddr,
    pub(crate) uploaded: String,
    pub(crate) downloaded: String,
    pub(crate) left: String,
    pub(crate) numwant: Option<i64>,
    pub(crate) secret: String,
    pub(crate) auth_tag: String,
}
