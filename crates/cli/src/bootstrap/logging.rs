use plmnscope_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

const WORKSPACE_TARGETS: &[&str] = &[
    "plmnscope",
    "plmnscope_api",
    "plmnscope_application",
    "plmnscope_domain",
    "plmnscope_infrastructure",
    "plmnscope_jobs",
];

fn default_directives(level: &str) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .chain(std::iter::once("tower_http=warn".to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&cfg.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if cfg.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
