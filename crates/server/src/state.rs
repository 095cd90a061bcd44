use std::sync::Arc;

use configs::{AppConfig, MapKitConfig};
use sea_orm::DatabaseConnection;

/// Shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: Arc<str>,
    pub session_hours: i64,
    /// Shared secret for the scheduler calling the alert generator.
    pub cron_secret: Option<Arc<str>>,
    pub mapkit: Arc<MapKitConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cfg: &AppConfig) -> Self {
        Self {
            db,
            jwt_secret: Arc::from(cfg.auth.jwt_secret.as_str()),
            session_hours: cfg.auth.session_hours,
            cron_secret: cfg.cron.secret.as_deref().map(Arc::from),
            mapkit: Arc::new(cfg.mapkit.clone()),
        }
    }

    pub fn auth_config(&self) -> service::auth::AuthConfig {
        service::auth::AuthConfig { jwt_secret: self.jwt_secret.to_string(), session_hours: self.session_hours }
    }
}
