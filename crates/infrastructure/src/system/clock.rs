use plmnscope_application::ports::Clock;
use std::time::Instant;

/// Monotonic wall clock backed by [`Instant::now`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
