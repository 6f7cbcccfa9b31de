use crate::tracker::structs::info_hash::InfoHash;

/// Receives `(seeders, leechers)` after every successful announce.
///
/// Must not block: it runs on the request path.
pub trait StatPublish: Send + Sync {
    fn publish(&self, info_hash: InfoHash, seeders: u64, leechers: u64);
}
