/// Reads the monotonic process clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;
