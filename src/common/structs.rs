/// Plain message error used during startup.
pub mod custom_error;

/// Wall clock backed by `Instant::now()`.
pub mod system_clock;

/// Manually advanced clock for simulating time.
pub mod manual_clock;
