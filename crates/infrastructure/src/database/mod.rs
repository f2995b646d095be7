use plmnscope_domain::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Opens the operator store read-only. The file must already exist; this
/// service never writes to it.
pub async fn create_read_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections.max(1))
        .connect_with(options)
        .await
}

/// Accepts either a bare path or a full `sqlite:` URL.
pub fn database_url(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite:{}", path)
    }
}
