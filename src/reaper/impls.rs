pub mod peer_reaper;
