pub mod infrastructure;
pub mod rate_limit;

pub use infrastructure::{InfrastructureParams, LookupResponse, ReportResponse};
pub use rate_limit::{CallerUsageResponse, LimiterStatsResponse, RateLimitedResponse};
