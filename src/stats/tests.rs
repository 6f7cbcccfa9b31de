#![allow(clippy::module_inception)]

#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::memory_torrent_store::MemoryTorrentStore;
    use crate::tracker::structs::memory_user_store::MemoryUserStore;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    fn tracker() -> TorrentTracker {
        TorrentTracker::new(
            Arc::new(Configuration::init()),
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryTorrentStore::new()),
            None,
        )
    }

    #[test]
    fn test_stats_atomics_start_at_zero() {
        let stats = StatsAtomics::new();
        assert!(stats.started.load(Ordering::SeqCst) > 0);
        assert_eq!(stats.torrents.load(Ordering::SeqCst), 0);
        assert_eq!(stats.peers_reaped.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_update_and_set_stats() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 3);
        tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, -1);
        let stats = tracker.update_stats(StatsEvent::PeersReaped, 7);
        assert_eq!(stats.tcp4_announces_handled, 2);
        assert_eq!(stats.peers_reaped, 7);

        let stats = tracker.set_stats(StatsEvent::PeersReaped, 0);
        assert_eq!(stats.peers_reaped, 0);
        assert_eq!(stats.tcp6_announces_handled, 0);
    }

    #[test]
    fn test_each_event_has_its_own_counter() {
        let tracker = tracker();
        let events = [
            StatsEvent::Torrents,
            StatsEvent::TorrentsUnloaded,
            StatsEvent::Tcp4AnnouncesHandled,
            StatsEvent::Tcp6AnnouncesHandled,
            StatsEvent::InvalidRequests,
            StatsEvent::UsersNotFound,
            StatsEvent::AuthenticationFailures,
            StatsEvent::TorrentsNotFound,
            StatsEvent::MalformedStats,
            StatsEvent::PeersReaped,
        ];
        for (i, event) in events.iter().enumerate() {
            tracker.set_stats(*event, i as i64 + 1);
        }
        let stats = tracker.get_stats();
        assert_eq!(
            [
                stats.torrents,
                stats.torrents_unloaded,
                stats.tcp4_announces_handled,
                stats.tcp6_announces_handled,
                stats.invalid_requests,
                stats.users_not_found,
                stats.authentication_failures,
                stats.torrents_not_found,
                stats.malformed_stats,
                stats.peers_reaped,
            ],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }
}
