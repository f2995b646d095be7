use async_trait::async_trait;
use plmnscope_domain::AddressSet;
use std::time::Duration;

/// Resolves one hostname to its IPv4 and IPv6 addresses.
///
/// The call never fails. A timeout, NXDOMAIN, a refused query or any other
/// lookup error all yield an empty set: a candidate name that does not exist
/// is the common case during infrastructure discovery, and callers only
/// branch on whether anything came back. Implementations must return within
/// roughly `timeout` and must not cache.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, hostname: &str, timeout: Duration) -> AddressSet;

    fn name(&self) -> &'static str;
}
