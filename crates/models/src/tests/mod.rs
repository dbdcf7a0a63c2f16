

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the `banks` table in place.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    crate::db::ensure_schema(&db).await?;
    Ok(db)
}
