/// AnnounceResponse bencoding.
pub mod announce_response;

/// CompactPeers packing.
pub mod compact_peers;

/// Metainfo decoding, info hash derivation and private announce URLs.
pub mod metainfo;
