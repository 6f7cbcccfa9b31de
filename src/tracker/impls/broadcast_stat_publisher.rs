use tokio::sync::broadcast;
use crate::tracker::structs::broadcast_stat_publisher::BroadcastStatPublisher;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::stat_update::StatUpdate;
use crate::tracker::traits::stat_publish::StatPublish;

impl BroadcastStatPublisher {
    pub fn new(capacity: usize) -> BroadcastStatPublisher
    {
        let (sender, _) = broadcast::channel(capacity.max(1));
        BroadcastStatPublisher { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StatUpdate>
    {
        self.sender.subscribe()
    }
}

impl StatPublish for BroadcastStatPublisher {
    fn publish(&self, info_hash: InfoHash, seeders: u64, leechers: u64)
    {
        let _ = self.sender.send(StatUpdate { info_hash, seeders, leechers });
    }
}
