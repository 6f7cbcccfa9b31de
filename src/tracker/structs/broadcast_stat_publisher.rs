use tokio::sync::broadcast;
use crate::tracker::structs::stat_update::StatUpdate;

/// Fans swarm counts out to any number of subscribers over a tokio broadcast channel.
///
/// Slow subscribers lag and lose updates; the announce path never waits.
#[derive(Debug, Clone)]
pub struct BroadcastStatPublisher {
    pub(crate) sender: broadcast::Sender<StatUpdate>,
}
