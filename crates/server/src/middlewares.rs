//! Request guards: dashboard session and scheduler secret.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use service::auth::service::actor_from_token;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "auth_token";

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the session token (bearer header first, then cookie) into an
/// [`service::Actor`] request extension.
pub async fn require_session(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let token = match bearer(req.headers()) {
        Some(t) => t.to_string(),
        None => CookieJar::from_headers(req.headers())
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| JsonApiError::unauthorized("missing session token"))?,
    };
    let actor = actor_from_token(&state.jwt_secret, &token).map_err(|e| {
        debug!(error = %e, "session token rejected");
        JsonApiError::unauthorized("invalid session token")
    })?;
    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}

/// Scheduler calls carry `Authorization: Bearer <cron secret>`. Without a
/// configured secret the route is closed.
pub async fn require_cron_secret(State(state): State<AppState>, req: Request, next: Next) -> Result<Response, JsonApiError> {
    let Some(secret) = state.cron_secret.as_deref() else {
        warn!("cron request refused: no cron secret configured");
        return Err(JsonApiError::new(StatusCode::FORBIDDEN, "Forbidden", Some("cron secret not configured".into())));
    };
    match bearer(req.headers()) {
        Some(given) if given == secret => Ok(next.run(req).await),
        _ => Err(JsonApiError::unauthorized("invalid cron secret")),
    }
}
