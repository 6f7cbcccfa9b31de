use std::fmt::Debug;
use std::time::Instant;

/// Supplies "now" to peer registries and the reaper.
///
/// Injected at construction time so tests can move time forward without
/// sleeping.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}
