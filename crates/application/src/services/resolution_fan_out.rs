use plmnscope_domain::AddressSet;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use crate::ports::HostResolver;

pub type ResolutionMap = HashMap<String, AddressSet>;

/// Drives a [`HostResolver`] over many hostnames at once.
///
/// Two bounds apply to every lookup: the per-call `concurrency` passed to
/// [`resolve_all`](Self::resolve_all), and a process-wide `max_in_flight`
/// shared by every batch running through this instance. The instance is
/// meant to be built once and shared; a batch costs one semaphore and one
/// task per hostname, never a pool of its own.
pub struct ResolutionFanOut {
    resolver: Arc<dyn HostResolver>,
    in_flight: Arc<Semaphore>,
    max_in_flight: usize,
}

impl ResolutionFanOut {
    pub fn new(resolver: Arc<dyn HostResolver>, max_in_flight: usize) -> Self {
        let max_in_flight = max_in_flight.max(1);
        Self {
            resolver,
            in_flight: Arc::new(Semaphore::new(max_in_flight)),
            max_in_flight,
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    pub fn available_permits(&self) -> usize {
        self.in_flight.available_permits()
    }

    /// Resolves every hostname and returns an entry for each distinct input,
    /// empty when the lookup failed, timed out or its task panicked.
    ///
    /// Duplicates are resolved once. Completion order is unspecified.
    /// Worst-case wall time is about `timeout * ceil(n / concurrency)`; there
    /// is no deadline shared across the batch. Dropping the returned future
    /// aborts lookups still in flight.
    #[instrument(skip(self, hostnames), fields(hostnames = hostnames.len()))]
    pub async fn resolve_all<S>(
        &self,
        hostnames: &[S],
        concurrency: usize,
        timeout: Duration,
    ) -> ResolutionMap
    where
        S: AsRef<str>,
    {
        let unique: BTreeSet<&str> = hostnames.iter().map(AsRef::as_ref).collect();

        let mut results: ResolutionMap = unique
            .iter()
            .map(|hostname| (hostname.to_string(), AddressSet::new()))
            .collect();

        if unique.is_empty() {
            return results;
        }

        let batch_permits = Arc::new(Semaphore::new(concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for hostname in unique {
            let hostname = hostname.to_string();
            let resolver = Arc::clone(&self.resolver);
            let batch_permits = Arc::clone(&batch_permits);
            let in_flight = Arc::clone(&self.in_flight);

            tasks.spawn(async move {
                let (Ok(_batch), Ok(_global)) = (
                    batch_permits.acquire_owned().await,
                    in_flight.acquire_owned().await,
                ) else {
                    return (hostname, AddressSet::new());
                };

                let ips = tokio::time::timeout(timeout, resolver.resolve(&hostname, timeout))
                    .await
                    .unwrap_or_default();

                (hostname, ips)
            });
        }

        let mut resolved = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((hostname, ips)) => {
                    if !ips.is_empty() {
                        resolved += 1;
                    }
                    debug!(hostname = %hostname, addresses = ips.len(), "Hostname resolution finished");
                    results.insert(hostname, ips);
                }
                Err(e) => {
                    warn!(error = %e, "Resolution task failed");
                }
            }
        }

        debug!(
            total = results.len(),
            resolved,
            resolver = self.resolver.name(),
            "Resolution batch completed"
        );

        results
    }
}
