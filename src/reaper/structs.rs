/// Evicts peers that stopped announcing.
pub mod peer_reaper;
