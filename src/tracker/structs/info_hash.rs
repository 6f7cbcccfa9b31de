//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 of the bencoded `info` dictionary of a torrent. The first byte
/// selects the torrent's shard in `TorrentSharding`.
///
/// # Example
///
/// ```rust
/// use private_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string().len(), 40);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
