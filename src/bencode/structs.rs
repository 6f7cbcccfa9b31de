/// Successful announce response fields.
pub mod announce_response;

/// Compact IPv4/IPv6 peer strings.
pub mod compact_peers;

/// Decoded `.torrent` metainfo.
pub mod metainfo;
