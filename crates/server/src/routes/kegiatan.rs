use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::kegiatan_pengolahan::Model as Kegiatan;
use service::actions::kegiatan_pengolahan as action;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<Kegiatan>> {
    action::list(&s.db, q.sppg_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<Kegiatan> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Kegiatan> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Kegiatan> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn complete(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Kegiatan> {
    action::complete(&s.db, &actor, id, &body).await.into()
}

async fn update_status(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Kegiatan> {
    action::update_status(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/kegiatan-pengolahan", get(list).post(create))
        .route("/api/kegiatan-pengolahan/:id", get(get_one).put(update).delete(delete))
        .route("/api/kegiatan-pengolahan/:id/complete", post(complete))
        .route("/api/kegiatan-pengolahan/:id/status", put(update_status))
}
