//! Data structures for the tracker.

/// The tracker instance shared by all request handlers.
pub mod torrent_tracker;

/// Parsed announce request.
pub mod announce_query_request;

/// 20-byte torrent info hash.
pub mod info_hash;

/// Client-chosen peer identifier.
pub mod peer_id;

/// One swarm member and its transfer counters.
pub mod torrent_peer;

/// Transfer counters reported on announce.
pub mod peer_stats;

/// Lock-guarded peer registry of a torrent.
pub mod peer_map;

/// A torrent: metainfo plus its peer registry.
pub mod torrent;

/// 256-shard torrent cache.
pub mod torrent_sharding;

pub mod user;

/// In-memory `UserLookup`.
pub mod memory_user_store;

/// In-memory `TorrentStore`.
pub mod memory_torrent_store;

/// Swarm counts for one torrent, as published after an announce.
pub mod stat_update;

/// `StatPublish` over a tokio broadcast channel.
pub mod broadcast_stat_publisher;
