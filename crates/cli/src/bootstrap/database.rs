use plmnscope_domain::config::DatabaseConfig;
use plmnscope_infrastructure::database::{create_read_pool, database_url};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let url = database_url(&cfg.path);
    info!("Opening operator store: {}", url);

    let pool = create_read_pool(&url, cfg).await.map_err(|e| {
        error!("Failed to open operator store: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Operator store opened read-only (read_pool max={})",
        cfg.read_pool_max_connections
    );

    Ok(pool)
}
