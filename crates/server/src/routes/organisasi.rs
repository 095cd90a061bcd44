use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::{organisasi, sppg};
use service::actions::{organisasi as action, sppg as sppg_action};
use service::services::organisasi::OrganisasiOption;
use service::Actor;

use crate::envelope::Envelope;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/organisasi", tag = "organisasi", responses((status = 200, description = "Organizations by name")))]
pub async fn list(State(s): State<AppState>) -> Envelope<Vec<organisasi::Model>> {
    action::list(&s.db).await.into()
}

async fn options(State(s): State<AppState>) -> Envelope<Vec<OrganisasiOption>> {
    action::list_options(&s.db).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<organisasi::Model> {
    action::get(&s.db, id).await.into()
}

async fn list_sppg(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<Vec<sppg::Model>> {
    sppg_action::list_by_organisasi(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<organisasi::Model> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<organisasi::Model> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/organisasi", get(list).post(create))
        .route("/api/organisasi/options", get(options))
        .route("/api/organisasi/:id", get(get_one).put(update).delete(delete))
        .route("/api/organisasi/:id/sppg", get(list_sppg))
}
