//! Type aliases for tracker collections.

/// `HashMap` using the aHash hasher.
pub mod ahash_map;
