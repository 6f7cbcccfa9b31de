/// Root configuration struct.
pub mod configuration;

/// Announce protocol and reaper settings.
pub mod tracker_config;

/// A single HTTP server instance.
pub mod http_trackers_config;

/// A user account and its announce secret.
pub mod user_config;
