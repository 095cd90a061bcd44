//! The caller's own alert notifications.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;

use service::actions::notifikasi_peringatan as action;
use service::services::notifikasi_peringatan::NotifikasiWithPeringatan;
use service::Actor;

use super::query_value;
use crate::envelope::Envelope;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/notifikasi", tag = "peringatan",
    params(
        ("limit" = Option<u64>, Query, description = "1..100, default 20"),
        ("unreadOnly" = Option<bool>, Query, description = "Skip notifications already read"),
    ),
    responses((status = 200, description = "Not dismissed, most urgent alert first"), (status = 422, description = "Invalid filter")))]
pub async fn list(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(params): Query<HashMap<String, String>>,
) -> Envelope<Vec<NotifikasiWithPeringatan>> {
    action::list(&s.db, &actor, &query_value(params)).await.into()
}

/// Body: `{ "notifikasiIds": [..], "action": "read" | "dismiss" | "undismiss" }`.
async fn mark(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<u64> {
    action::mark(&s.db, &actor, &body).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notifikasi", get(list))
        .route("/api/notifikasi/mark", post(mark))
}
