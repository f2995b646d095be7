use clap::Parser;
use plmnscope_api::AppState;
use plmnscope_domain::CliOverrides;
use plmnscope_jobs::{JobRunner, RateWindowPruneJob};
use std::net::SocketAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "plmnscope")]
#[command(version)]
#[command(about = "plmnscope - mobile operator infrastructure discovery service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Operator store path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Simultaneous lookups per batch
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-hostname resolution timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        concurrency: cli.concurrency,
        timeout_secs: cli.timeout,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting plmnscope v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::Services::new(&config, pool)?;

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_rate_window_prune(
            RateWindowPruneJob::new(services.limiter.clone())
                .with_interval(Duration::from_secs(config.rate_limit.prune_interval_secs)),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        ctrl_c_token.cancel();
    });

    let app_state = AppState {
        lookup: services.lookup,
        limiter: services.limiter,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(web_addr, app_state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
