use std::sync::Arc;
use std::time::Duration;
use crate::common::traits::clock::Clock;

/// Reaps peers whose `last_seen` is more than `threshold` in the past, as told by `clock`.
#[derive(Debug, Clone)]
pub struct PeerReaper {
    pub(crate) threshold: Duration,
    pub(crate) clock: Arc<dyn Clock>,
}
