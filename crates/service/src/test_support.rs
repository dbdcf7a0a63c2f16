#![cfg(test)]
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};

/// Fresh in-memory SQLite database per test, with the `banks` table created.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
