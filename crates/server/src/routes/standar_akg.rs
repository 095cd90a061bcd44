use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::standar_akg::{AkgEvaluation, Model as StandarAkg};
use service::actions::standar_akg as action;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<StandarAkg>> {
    action::list(&s.db, q.active_only.unwrap_or(false)).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<StandarAkg> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<StandarAkg> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<StandarAkg> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

#[utoipa::path(post, path = "/api/standar-akg/validate", tag = "gizi",
    responses((status = 200, description = "Portion graded against the active standard"), (status = 404, description = "No active standard for the age group"), (status = 422, description = "Invalid portion")))]
pub async fn validate(State(s): State<AppState>, Json(body): Json<Value>) -> Envelope<AkgEvaluation> {
    action::validate(&s.db, &body).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/standar-akg", get(list).post(create))
        .route("/api/standar-akg/validate", post(validate))
        .route("/api/standar-akg/:id", get(get_one).put(update).delete(delete))
}
