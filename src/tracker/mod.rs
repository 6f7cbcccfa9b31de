//! Core tracker implementation.
//!
//! Holds the torrent cache, the per-torrent peer registries and the announce
//! pipeline that ties them to user authentication.
//!
//! # Architecture
//!
//! - Torrents are cached across 256 shards keyed on the first info hash byte
//! - Each torrent owns a `PeerMap` guarded by one `RwLock`
//! - User and torrent lookups are collaborators behind traits, supplied
//!   when the `TorrentTracker` is built
//!
//! # Example
//!
//! ```rust,ignore
//! use private_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(config, users, torrents, None);
//! let body = tracker.announce(remote_ip, &secret, &auth_tag, &query).await;
//! ```

/// Peer status and error enumerations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for torrents, peers and collaborators.
pub mod structs;

/// Collaborator traits (user lookup, torrent store, stat publishing).
pub mod traits;

/// Type aliases for collections.
pub mod types;
