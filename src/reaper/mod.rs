//! Stale peer eviction.
//!
//! A reap cycle runs in two phases against one torrent's registry: a read-only
//! scan collecting peers idle for longer than the staleness threshold, then a
//! separate write that removes them. No lock is held between the phases, and
//! a peer that announces in between is kept.

/// Reaper data structures.
pub mod structs;

/// Scan, evict and scheduling logic.
pub mod impls;
