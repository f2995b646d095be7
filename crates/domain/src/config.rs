pub mod database;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod resolver;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use resolver::{ResolverConfig, ResolverMode};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
