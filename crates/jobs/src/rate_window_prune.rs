use plmnscope_application::services::SlidingWindowRateLimiter;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_PRUNE_INTERVAL_SECS: u64 = 300;

/// Periodically forgets rate-limit history older than an hour, so callers
/// seen once do not stay in memory forever.
pub struct RateWindowPruneJob {
    limiter: Arc<SlidingWindowRateLimiter>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RateWindowPruneJob {
    pub fn new(limiter: Arc<SlidingWindowRateLimiter>) -> Self {
        Self {
            limiter,
            interval: Duration::from_secs(DEFAULT_PRUNE_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting rate window prune job"
        );

        let mut interval = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RateWindowPruneJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let removed = self.limiter.prune();
                    if removed > 0 {
                        info!(callers_removed = removed, "Rate limit history pruned");
                    } else {
                        debug!("Rate limit prune found nothing to remove");
                    }
                }
            }
        }
    }
}
