use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateWindow {
    Minute,
    Hour,
}

impl RateWindow {
    pub fn length(&self) -> Duration {
        match self {
            RateWindow::Minute => Duration::from_secs(60),
            RateWindow::Hour => Duration::from_secs(3600),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            RateWindow::Minute => "minute",
            RateWindow::Hour => "hour",
        }
    }
}

impl fmt::Display for RateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitDenial {
    pub window: RateWindow,
    pub limit: u32,
    pub wait_secs: u64,
    pub minute_count: usize,
    pub hour_count: usize,
}

impl RateLimitDenial {
    pub fn message(&self) -> String {
        match self.window {
            RateWindow::Minute => format!(
                "Rate limit: {} queries/minute exceeded. Please wait {} seconds. \
                 Your usage: {} queries in last minute, {} queries in last hour.",
                self.limit, self.wait_secs, self.minute_count, self.hour_count
            ),
            RateWindow::Hour => format!(
                "Rate limit: {} queries/hour exceeded. Please wait {} minutes. \
                 Your usage: {} queries in last hour.",
                self.limit,
                self.wait_secs / 60,
                self.hour_count
            ),
        }
    }
}

/// Outcome of an admission check. Denial is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateDecision {
    Admitted,
    Bypassed,
    Denied(RateLimitDenial),
}

impl RateDecision {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, RateDecision::Denied(_))
    }

    pub fn wait_secs(&self) -> u64 {
        match self {
            RateDecision::Denied(denial) => denial.wait_secs,
            _ => 0,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            RateDecision::Denied(denial) => denial.message(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerUsage {
    pub minute_count: usize,
    pub hour_count: usize,
    pub bypassed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterStats {
    pub tracked_callers: usize,
    pub requests_last_hour: usize,
}
