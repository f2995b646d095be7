mod resolver;

use plmnscope_application::ports::{Clock, OperatorRepository};
use plmnscope_application::services::{
    InfrastructureAggregator, ResolutionFanOut, SlidingWindowRateLimiter,
};
use plmnscope_application::use_cases::LookupInfrastructureUseCase;
use plmnscope_domain::Config;
use plmnscope_infrastructure::repositories::SqliteOperatorRepository;
use plmnscope_infrastructure::system::SystemClock;
use sqlx::SqlitePool;
use std::sync::Arc;

pub use resolver::build_resolver;

pub struct Services {
    pub lookup: Arc<LookupInfrastructureUseCase>,
    pub limiter: Arc<SlidingWindowRateLimiter>,
}

impl Services {
    pub fn new(config: &Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let repository: Arc<dyn OperatorRepository> =
            Arc::new(SqliteOperatorRepository::new(pool));

        let resolver = build_resolver(&config.resolver)?;
        let fan_out = Arc::new(ResolutionFanOut::new(
            resolver,
            config.resolver.max_in_flight,
        ));
        let aggregator = Arc::new(InfrastructureAggregator::new(fan_out));

        let lookup = Arc::new(
            LookupInfrastructureUseCase::new(repository, aggregator)
                .with_resolution(config.resolver.concurrency, config.resolver.timeout()),
        );

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let limiter = Arc::new(SlidingWindowRateLimiter::from_config(
            &config.rate_limit,
            clock,
        ));

        Ok(Self { lookup, limiter })
    }
}
