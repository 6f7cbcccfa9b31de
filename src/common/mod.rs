//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker codebase.
//!
//! # Utilities
//!
//! - Query string parsing (raw percent-decoded bytes)
//! - Logging setup
//! - Shutdown-aware sleeping
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type for startup failures
//! - `SystemClock` / `ManualClock` - implementations of the `Clock` capability

/// Common data structures (errors, clocks).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Capability traits shared by the tracker and the reaper.
pub mod traits;
