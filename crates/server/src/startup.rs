use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool described by `cfg.database` and make sure `banks` exists.
pub async fn connect_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    cfg.database
        .validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(db)
}

/// Router wired to the given database connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::from_db(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&cfg).await?;
    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting bank api server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
