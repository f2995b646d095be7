use dashmap::DashMap;
use plmnscope_domain::config::RateLimitConfig;
use plmnscope_domain::{CallerUsage, RateDecision, RateLimitDenial, RateLimiterStats, RateWindow};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::ports::Clock;

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);

/// Per-caller sliding-window limiter with a minute and an hour window.
///
/// Each caller owns an ordered queue of request instants; entries older than
/// an hour are purged lazily. Callers in the bypass set are always admitted, but
/// their requests are still recorded so usage stats stay accurate.
pub struct SlidingWindowRateLimiter {
    windows: DashMap<String, VecDeque<Instant>>,
    max_per_minute: u32,
    max_per_hour: u32,
    bypass: HashSet<String>,
    clock: Arc<dyn Clock>,
}

impl SlidingWindowRateLimiter {
    pub fn new(
        max_per_minute: u32,
        max_per_hour: u32,
        bypass: HashSet<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            windows: DashMap::new(),
            max_per_minute,
            max_per_hour,
            bypass,
            clock,
        }
    }

    pub fn from_config(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            config.max_per_minute,
            config.max_per_hour,
            config.bypass_set(),
            clock,
        )
    }

    pub fn is_bypassed(&self, caller: &str) -> bool {
        self.bypass.contains(caller)
    }

    pub fn max_per_minute(&self) -> u32 {
        self.max_per_minute
    }

    pub fn max_per_hour(&self) -> u32 {
        self.max_per_hour
    }

    /// Decides whether `caller` may proceed without recording anything.
    pub fn check_and_admit(&self, caller: &str) -> RateDecision {
        if self.is_bypassed(caller) {
            return RateDecision::Bypassed;
        }

        let now = self.clock.now();
        match self.windows.get_mut(caller) {
            Some(mut window) => self.evaluate(&mut window, now),
            None => self.evaluate(&mut VecDeque::new(), now),
        }
    }

    /// Appends a request at the current instant. Bypassed callers are
    /// recorded too.
    pub fn record(&self, caller: &str) {
        let now = self.clock.now();
        let mut window = self.windows.entry(caller.to_string()).or_default();
        purge_expired(&mut window, now);
        window.push_back(now);
    }

    /// Check and record under one lock, so two concurrent requests from the
    /// same caller cannot both take the last free slot.
    pub fn try_acquire(&self, caller: &str) -> RateDecision {
        let now = self.clock.now();
        let mut window = self.windows.entry(caller.to_string()).or_default();

        let decision = if self.is_bypassed(caller) {
            purge_expired(&mut window, now);
            RateDecision::Bypassed
        } else {
            self.evaluate(&mut window, now)
        };

        if decision.is_admitted() {
            window.push_back(now);
        }

        if let RateDecision::Denied(denial) = &decision {
            debug!(
                caller = %caller,
                window = %denial.window,
                wait_secs = denial.wait_secs,
                "Request denied by rate limiter"
            );
        }

        decision
    }

    pub fn caller_stats(&self, caller: &str) -> CallerUsage {
        let now = self.clock.now();
        let (minute_count, hour_count) = self
            .windows
            .get(caller)
            .map(|window| count_windows(&window, now))
            .unwrap_or((0, 0));

        CallerUsage {
            minute_count,
            hour_count,
            bypassed: self.is_bypassed(caller),
        }
    }

    pub fn global_stats(&self) -> RateLimiterStats {
        let now = self.clock.now();
        let mut tracked_callers = 0;
        let mut requests_last_hour = 0;

        for entry in self.windows.iter() {
            let (_, hour_count) = count_windows(entry.value(), now);
            if hour_count > 0 {
                tracked_callers += 1;
                requests_last_hour += hour_count;
            }
        }

        RateLimiterStats {
            tracked_callers,
            requests_last_hour,
        }
    }

    /// Forgets every recorded request for `caller`. Returns whether anything
    /// was tracked.
    pub fn reset_caller(&self, caller: &str) -> bool {
        let removed = self.windows.remove(caller).is_some();
        if removed {
            info!(caller = %caller, "Rate limit history reset");
        }
        removed
    }

    /// Drops expired instants for every caller and forgets callers left with
    /// no history. Returns the number of callers removed.
    pub fn prune(&self) -> usize {
        let now = self.clock.now();
        let before = self.windows.len();

        self.windows.retain(|_, window| {
            purge_expired(window, now);
            !window.is_empty()
        });

        before.saturating_sub(self.windows.len())
    }

    fn evaluate(&self, window: &mut VecDeque<Instant>, now: Instant) -> RateDecision {
        purge_expired(window, now);

        let (minute_count, hour_count) = count_windows(window, now);

        if minute_count >= self.max_per_minute as usize {
            let oldest = window
                .iter()
                .find(|ts| now.saturating_duration_since(**ts) <= MINUTE)
                .copied();
            return RateDecision::Denied(RateLimitDenial {
                window: RateWindow::Minute,
                limit: self.max_per_minute,
                wait_secs: remaining_secs(RateWindow::Minute, oldest, now),
                minute_count,
                hour_count,
            });
        }

        if hour_count >= self.max_per_hour as usize {
            return RateDecision::Denied(RateLimitDenial {
                window: RateWindow::Hour,
                limit: self.max_per_hour,
                wait_secs: remaining_secs(RateWindow::Hour, window.front().copied(), now),
                minute_count,
                hour_count,
            });
        }

        RateDecision::Admitted
    }
}

fn purge_expired(window: &mut VecDeque<Instant>, now: Instant) {
    while let Some(oldest) = window.front() {
        if now.saturating_duration_since(*oldest) > HOUR {
            window.pop_front();
        } else {
            break;
        }
    }
}

fn count_windows(window: &VecDeque<Instant>, now: Instant) -> (usize, usize) {
    window.iter().fold((0, 0), |(minute, hour), ts| {
        let age = now.saturating_duration_since(*ts);
        if age <= MINUTE {
            (minute + 1, hour + 1)
        } else if age <= HOUR {
            (minute, hour + 1)
        } else {
            (minute, hour)
        }
    })
}

fn remaining_secs(window: RateWindow, oldest: Option<Instant>, now: Instant) -> u64 {
    match oldest {
        Some(ts) => window
            .length()
            .saturating_sub(now.saturating_duration_since(ts))
            .as_secs(),
        None => window.length().as_secs(),
    }
}
