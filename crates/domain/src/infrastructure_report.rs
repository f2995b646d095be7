use crate::operator::OperatorIdentity;
use crate::resolved_host::ResolvedHost;
use serde::{Deserialize, Serialize};

/// Live infrastructure found for one operator in a single query.
///
/// `hosts` is sorted by hostname. With `include_unresolved == false` it only
/// holds resolved hosts; otherwise every candidate appears with its
/// `resolved` flag. The counters are filled in both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrastructureReport {
    pub operator: OperatorIdentity,
    pub total_candidates: usize,
    pub active_count: usize,
    pub inactive_count: usize,
    pub include_unresolved: bool,
    pub hosts: Vec<ResolvedHost>,
    pub resolution_duration_ms: u64,
}

impl InfrastructureReport {
    pub fn active_hosts(&self) -> impl Iterator<Item = &ResolvedHost> {
        self.hosts.iter().filter(|h| h.resolved)
    }

    pub fn has_active_hosts(&self) -> bool {
        self.active_count > 0
    }
}
