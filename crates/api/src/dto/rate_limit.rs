use plmnscope_domain::{RateLimitDenial, RateWindow};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CallerUsageResponse {
    pub caller: String,
    pub minute_count: usize,
    pub hour_count: usize,
    pub max_per_minute: u32,
    pub max_per_hour: u32,
    pub bypassed: bool,
}

#[derive(Serialize, Debug)]
pub struct LimiterStatsResponse {
    pub tracked_callers: usize,
    pub requests_last_hour: usize,
}

#[derive(Serialize, Debug)]
pub struct RateLimitedResponse {
    pub error: String,
    pub wait_seconds: u64,
    pub window: RateWindow,
}

impl From<&RateLimitDenial> for RateLimitedResponse {
    fn from(denial: &RateLimitDenial) -> Self {
        Self {
            error: denial.message(),
            wait_seconds: denial.wait_secs,
            window: denial.window,
        }
    }
}
