/// CustomError implementation: construction, Display, Error.
pub mod custom_error;

/// Clock implementation for SystemClock.
pub mod system_clock;

/// ManualClock implementation: construction, advancing, Clock.
pub mod manual_clock;
