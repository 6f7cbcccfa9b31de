//! Real-time statistics tracking.
//!
//! Atomic counters for announce traffic, failure kinds and reaper activity.
//! Counters are updated from many request-handling tasks at once without
//! locking, and a snapshot is logged periodically by the binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use private_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
