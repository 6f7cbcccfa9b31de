/// Peer lifecycle status (seeding, leeching, not yet reported).
pub mod peer_status;

/// Errors returned by peer statistics updates.
pub mod stats_error;

/// Announce refusal reasons, rendered as the wire `failure reason`.
pub mod announce_error;
