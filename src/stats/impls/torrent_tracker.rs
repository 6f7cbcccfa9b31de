use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            torrents_unloaded: self.stats.torrents_unloaded.load(Ordering::SeqCst),
            tcp4_announces_handled: self.stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.stats.tcp6_announces_handled.load(Ordering::SeqCst),
            invalid_requests: self.stats.invalid_requests.load(Ordering::SeqCst),
            users_not_found: self.stats.users_not_found.load(Ordering::SeqCst),
            authentication_failures: self.stats.authentication_failures.load(Ordering::SeqCst),
            torrents_not_found: self.stats.torrents_not_found.load(Ordering::SeqCst),
            malformed_stats: self.stats.malformed_stats.load(Ordering::SeqCst),
            peers_reaped: self.stats.peers_reaped.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst);
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Torrents => &self.stats.torrents,
            StatsEvent::TorrentsUnloaded => &self.stats.torrents_unloaded,
            StatsEvent::Tcp4AnnouncesHandled => &self.stats.tcp4_announces_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.stats.tcp6_announces_handled,
            StatsEvent::InvalidRequests => &self.stats.invalid_requests,
            StatsEvent::UsersNotFound => &self.stats.users_not_found,
            StatsEvent::AuthenticationFailures => &self.stats.authentication_failures,
            StatsEvent::TorrentsNotFound => &self.stats.torrents_not_found,
            StatsEvent::MalformedStats => &self.stats.malformed_stats,
            StatsEvent::PeersReaped => &self.stats.peers_reaped,
        }
    }
}
