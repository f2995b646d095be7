use plmnscope_domain::{InfrastructureReport, OperatorIdentity, ResolvedHost};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use super::resolution_fan_out::ResolutionFanOut;

pub struct InfrastructureAggregator {
    fan_out: Arc<ResolutionFanOut>,
}

impl InfrastructureAggregator {
    pub fn new(fan_out: Arc<ResolutionFanOut>) -> Self {
        Self { fan_out }
    }

    /// Resolves an operator's candidate hostnames and assembles its report.
    ///
    /// `resolution_duration_ms` covers only the fan-out. No retries: a name
    /// that fails here is reported unresolved.
    #[instrument(skip(self, operator, hostnames), fields(operator = %operator.name))]
    pub async fn build_report<S>(
        &self,
        operator: OperatorIdentity,
        hostnames: &[S],
        concurrency: usize,
        timeout: Duration,
        include_unresolved: bool,
    ) -> InfrastructureReport
    where
        S: AsRef<str>,
    {
        let candidates: BTreeSet<&str> = hostnames.iter().map(AsRef::as_ref).collect();

        let started = Instant::now();
        let mut resolution = self
            .fan_out
            .resolve_all(hostnames, concurrency, timeout)
            .await;
        let resolution_duration_ms = started.elapsed().as_millis() as u64;

        let mut hosts = Vec::with_capacity(candidates.len());
        let mut active_count = 0usize;

        for hostname in &candidates {
            let ips = resolution.remove(*hostname).unwrap_or_default();
            let host = ResolvedHost::new(*hostname, ips);

            if host.resolved {
                active_count += 1;
                hosts.push(host);
            } else if include_unresolved {
                hosts.push(host);
            }
        }

        let total_candidates = candidates.len();

        debug!(
            total = total_candidates,
            active = active_count,
            duration_ms = resolution_duration_ms,
            "Infrastructure report built"
        );

        InfrastructureReport {
            operator,
            total_candidates,
            active_count,
            inactive_count: total_candidates - active_count,
            include_unresolved,
            hosts,
            resolution_duration_ms,
        }
    }
}
