use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::sppg;
use service::actions::sppg as action;
use service::services::sppg::{SppgStats, SppgWithOrganisasi};
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/sppg", tag = "sppg", params(ScopeQuery), responses((status = 200, description = "Units, newest first")))]
pub async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<sppg::Model>> {
    action::list(&s.db, q.organisasi_id).await.into()
}

async fn map(State(s): State<AppState>) -> Envelope<Vec<SppgWithOrganisasi>> {
    action::list_for_map(&s.db).await.into()
}

async fn stats(State(s): State<AppState>) -> Envelope<SppgStats> {
    action::stats(&s.db).await.into()
}

#[utoipa::path(get, path = "/api/sppg/{id}", tag = "sppg", params(("id" = Uuid, Path, description = "SPPG id")),
    responses((status = 200, description = "Unit with its organization"), (status = 404, description = "Not found")))]
pub async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<SppgWithOrganisasi> {
    action::get(&s.db, id).await.into()
}

#[utoipa::path(post, path = "/api/sppg", tag = "sppg", request_body = crate::openapi::SppgRequest,
    responses((status = 200, description = "Created as DRAFT"), (status = 422, description = "Invalid fields")))]
pub async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<sppg::Model> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<sppg::Model> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn verify(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<sppg::Model> {
    action::verify(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/sppg", get(list).post(create))
        .route("/api/sppg/map", get(map))
        .route("/api/sppg/stats", get(stats))
        .route("/api/sppg/:id", get(get_one).put(update).delete(delete))
        .route("/api/sppg/:id/verify", post(verify))
}
