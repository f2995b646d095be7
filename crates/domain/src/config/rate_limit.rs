use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_per_minute")]
    pub max_per_minute: u32,

    #[serde(default = "default_max_per_hour")]
    pub max_per_hour: u32,

    /// Caller identities that are never denied.
    #[serde(default)]
    pub admin_bypass_ids: Vec<String>,

    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
}

impl RateLimitConfig {
    pub fn bypass_set(&self) -> HashSet<String> {
        self.admin_bypass_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_per_minute: default_max_per_minute(),
            max_per_hour: default_max_per_hour(),
            admin_bypass_ids: Vec::new(),
            prune_interval_secs: default_prune_interval_secs(),
        }
    }
}

fn default_max_per_minute() -> u32 {
    10
}

fn default_max_per_hour() -> u32 {
    50
}

fn default_prune_interval_secs() -> u64 {
    300
}
