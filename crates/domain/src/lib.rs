//! plmnscope domain layer
pub mod config;
pub mod errors;
pub mod infrastructure_report;
pub mod operator;
pub mod rate_limit;
pub mod resolved_host;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use infrastructure_report::InfrastructureReport;
pub use operator::{CountryRecord, OperatorIdentity, OperatorRecord, PlmnId, MAX_PLMN_CODE};
pub use rate_limit::{
    CallerUsage, RateDecision, RateLimitDenial, RateLimiterStats, RateWindow,
};
pub use resolved_host::{normalize_addresses, AddressSet, ResolvedHost};
