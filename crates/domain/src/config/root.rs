use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::resolver::{ResolverConfig, ResolverMode};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "plmnscope.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/plmnscope/config.toml";

/// Main configuration structure for plmnscope
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP front-end (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Hostname resolution (worker bounds, timeout, resolver backend)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Per-caller request limits
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Operator record store
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. plmnscope.toml in current directory
    /// 3. /etc/plmnscope/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.resolver.concurrency = concurrency;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.resolver.concurrency == 0 {
            return Err(ConfigError::Validation(
                "Resolver concurrency must be at least 1".to_string(),
            ));
        }

        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout must be greater than 0".to_string(),
            ));
        }

        if self.resolver.max_in_flight == 0 {
            return Err(ConfigError::Validation(
                "Resolver max_in_flight must be at least 1".to_string(),
            ));
        }

        if self.resolver.mode == ResolverMode::Upstream {
            if self.resolver.upstream_servers.is_empty() {
                return Err(ConfigError::Validation(
                    "Upstream resolver mode requires at least one upstream server".to_string(),
                ));
            }
            self.resolver
                .parsed_upstream_servers()
                .map_err(ConfigError::Validation)?;
        }

        if self.rate_limit.max_per_minute == 0 || self.rate_limit.max_per_hour == 0 {
            return Err(ConfigError::Validation(
                "Rate limits must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
}
