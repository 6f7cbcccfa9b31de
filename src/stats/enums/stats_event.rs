//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant selects one counter in `StatsAtomics`. Used with
/// `TorrentTracker::update_stats()` to add to (or subtract from) it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    TorrentsUnloaded,
    Tcp4AnnouncesHandled,
    Tcp6AnnouncesHandled,
    InvalidRequests,
    UsersNotFound,
    AuthenticationFailures,
    TorrentsNotFound,
    MalformedStats,
    PeersReaped,
}
