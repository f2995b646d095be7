pub mod infrastructure_aggregator;
pub mod rate_limiter;
pub mod resolution_fan_out;

pub use infrastructure_aggregator::InfrastructureAggregator;
pub use rate_limiter::SlidingWindowRateLimiter;
pub use resolution_fan_out::{ResolutionFanOut, ResolutionMap};
