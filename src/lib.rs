//! # Private BitTorrent Tracker
//!
//! An HTTP BitTorrent tracker for private communities, built on actix-web.
//!
//! ## Overview
//!
//! Every user owns a hex secret. The tracker hands out announce URLs of the
//! form `/{secret}/{auth_tag}/announce`, where the tag is an HMAC-SHA256 of
//! the secret under a shared key. An announce is only served when the
//! secret belongs to a known user, the tag still verifies and the torrent is
//! registered with the tracker.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 7: IPv6 Tracker Extension (`peers6`)
//! - BEP 23: Tracker Returns Compact Peer Lists
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use private_tracker::config::structs::configuration::Configuration;
//! use private_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let users = Arc::new(MemoryUserStore::from_config(&config.users));
//! let torrents = Arc::new(MemoryTorrentStore::new());
//! let tracker = TorrentTracker::new(config, users, torrents, None);
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Wire codec: responses, compact peers, `.torrent` decoding
//! - [`common`] - Query parsing, logging setup, errors and clocks
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker transport
//! - [`reaper`] - Stale peer eviction
//! - [`security`] - Announce secret verification
//! - [`stats`] - Real-time statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Torrent cache, peer registries and the announce pipeline

/// Bencode wire codec.
///
/// Encodes announce and failure responses, packs compact peer lists and
/// decodes `.torrent` files far enough to derive their info hash.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, logging setup and
/// shutdown-aware sleeping, plus the `Clock` capability.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating configuration from TOML files.
pub mod config;

/// HTTP tracker protocol implementation.
///
/// Serves `/{secret}/{auth_tag}/announce` over actix-web on any number of
/// configured listeners.
pub mod http;

/// Stale peer eviction, on demand or on a schedule.
pub mod reaper;

/// HMAC-SHA256 issuing and verification of announce tags.
pub mod security;

/// Statistics tracking.
///
/// Counts announces handled, refusals by reason, torrents loaded and peers reaped.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the torrent cache, the per-torrent peer registries, the
/// collaborator traits and the announce request handling logic.
pub mod tracker;
