use std::time::Instant;
use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
