use std::sync::atomic::AtomicU64;
use std::time::Instant;

/// A clock that only moves when told to.
///
/// Time starts at the instant the clock was created and advances in whole
/// milliseconds through `ManualClock::advance`. Shared between threads
/// behind an `Arc`.
#[derive(Debug)]
pub struct ManualClock {
    pub(crate) origin: Instant,
    pub(crate) offset_millis: AtomicU64,
}
