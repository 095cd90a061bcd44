use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use service::auth::errors::AuthError;
use service::mapkit::MapKitError;

/// Error body for endpoints outside the action envelope (auth, tokens, guards).
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "success": false, "error": self.error });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::Value::String(detail);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        let code = e.code();
        let (status, title) = match &e {
            AuthError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed"),
            AuthError::Conflict => (StatusCode::CONFLICT, "User Exists"),
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid Credentials"),
            AuthError::TokenError(_) => (StatusCode::UNAUTHORIZED, "Invalid Token"),
            AuthError::HashError(_) | AuthError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Auth Failed"),
        };
        if status.is_server_error() {
            error!(code, error = %e, "auth failure");
            return Self::new(status, title, None);
        }
        warn!(code, error = %e, "auth rejected");
        let detail = match e {
            AuthError::Validation(m) => Some(m),
            _ => None,
        };
        Self::new(status, title, detail)
    }
}

impl From<MapKitError> for JsonApiError {
    fn from(e: MapKitError) -> Self {
        error!(error = %e, "mapkit token failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate MapKit token", None)
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
