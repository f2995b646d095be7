use async_trait::async_trait;
use plmnscope_application::ports::HostResolver;
use plmnscope_domain::{normalize_addresses, AddressSet};
use std::time::Duration;
use tracing::debug;

/// Resolves through the operating system's stub resolver, both address
/// families. Honors hosts files and local search configuration.
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, hostname: &str, timeout: Duration) -> AddressSet {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return AddressSet::new();
        }

        let lookup = tokio::net::lookup_host((hostname, 0));

        match tokio::time::timeout(timeout, lookup).await {
            Ok(Ok(addrs)) => normalize_addresses(addrs.map(|addr| addr.ip())),
            Ok(Err(e)) => {
                debug!(hostname = %hostname, error = %e, "System lookup failed");
                AddressSet::new()
            }
            Err(_) => {
                debug!(hostname = %hostname, timeout_ms = timeout.as_millis() as u64, "System lookup timed out");
                AddressSet::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "system"
    }
}
