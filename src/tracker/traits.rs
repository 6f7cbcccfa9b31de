/// Resolves announce secrets to users.
pub mod user_lookup;

/// Persistent torrent metainfo lookup behind the torrent cache.
pub mod torrent_store;

/// Sink for per-torrent swarm counts.
pub mod stat_publish;
