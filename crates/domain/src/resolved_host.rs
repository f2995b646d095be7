use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::IpAddr;

/// Unique addresses of one hostname in lexicographic string order.
///
/// Ordering is by the textual form, not numeric value, so `"10.0.0.10"`
/// sorts before `"10.0.0.9"` and IPv6 literals interleave by their first
/// character. This keeps output comparable across runs and resolvers.
pub type AddressSet = BTreeSet<String>;

pub fn normalize_addresses<I>(addresses: I) -> AddressSet
where
    I: IntoIterator<Item = IpAddr>,
{
    addresses.into_iter().map(|ip| ip.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHost {
    pub hostname: String,
    pub ips: Vec<String>,
    pub resolved: bool,
}

impl ResolvedHost {
    pub fn new(hostname: impl Into<String>, ips: AddressSet) -> Self {
        let resolved = !ips.is_empty();
        Self {
            hostname: hostname.into(),
            ips: ips.into_iter().collect(),
            resolved,
        }
    }

    pub fn unresolved(hostname: impl Into<String>) -> Self {
        Self::new(hostname, AddressSet::new())
    }
}
