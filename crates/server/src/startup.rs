use std::net::SocketAddr;

use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use common::env::check_key_file;
use common::utils::logging::{init_logging_default, init_logging_json};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

pub fn init_logging(json: bool) {
    if json {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Connect, migrate and serve until Ctrl+C. Logging must already be set up.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    check_key_file(cfg.mapkit.private_key_path.as_deref()).await?;
    if !cfg.mapkit.is_configured() {
        warn!("mapkit is not configured; /api/mapkit/token only serves a configured MAPKIT_JWT");
    }
    if cfg.cron.secret.is_none() {
        warn!("CRON_SECRET not set; GET /api/peringatan/generate-alerts is closed");
    }

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("database migrated");

    let app = routes::build_router(AppState::new(db, &cfg), build_cors());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind {addr}: {e}")))?;
    info!(%addr, "jaga gizi server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9100;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9100);

        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }
}
