use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::{bank, errors::ModelError};

/// Connect with pool settings taken from configuration.
///
/// An in-memory SQLite database only lives as long as its connection, so the
/// pool is pinned to a single connection that never expires.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let in_memory = cfg.is_sqlite() && cfg.url.contains(":memory:");
    let (max, min) = if in_memory { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };

    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !in_memory {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = max, "database connected");
    Ok(db)
}

/// Create the `banks` table from the entity definition unless it already exists.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(bank::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}
