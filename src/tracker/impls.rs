//! Implementation blocks for tracker structs.

pub mod torrent_tracker;
pub mod torrent_tracker_handlers;
pub mod torrent_tracker_torrents;
pub mod info_hash;
pub mod peer_id;
pub mod torrent_peer;
pub mod peer_stats;
pub mod peer_map;
pub mod torrent;
pub mod torrent_sharding;
pub mod memory_user_store;
pub mod memory_torrent_store;
pub mod broadcast_stat_publisher;
