use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Operating-system resolver (getaddrinfo), both address families.
    #[default]
    System,

    /// Direct A/AAAA queries over UDP to `upstream_servers`, in order.
    Upstream,
}

impl ResolverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Upstream => "upstream",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub mode: ResolverMode,

    /// Maximum simultaneous lookups within one batch.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum simultaneous lookups across all batches in the process.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,

    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn parsed_upstream_servers(&self) -> Result<Vec<SocketAddr>, String> {
        self.upstream_servers
            .iter()
            .map(|s| {
                s.parse::<SocketAddr>()
                    .map_err(|e| format!("Invalid upstream server '{}': {}", s, e))
            })
            .collect()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::default(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
            max_in_flight: default_max_in_flight(),
            upstream_servers: default_upstream_servers(),
        }
    }
}

fn default_concurrency() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_in_flight() -> usize {
    64
}

fn default_upstream_servers() -> Vec<String> {
    vec![
        "8.8.8.8:53".to_string(),
        "1.1.1.1:53".to_string(),
        "208.67.222.222:53".to_string(),
    ]
}
