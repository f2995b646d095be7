#![allow(dead_code)]

use plmnscope_application::ports::Clock;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Clock that only moves when told to.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn set_secs(&self, secs: u64) {
        *self.offset.lock().unwrap() = Duration::from_secs(secs);
    }

    pub fn advance_secs(&self, secs: u64) {
        *self.offset.lock().unwrap() += Duration::from_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}
