use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::dokumen_sppg::Model as Dokumen;
use service::actions::dokumen_sppg as action;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<Dokumen>> {
    action::list(&s.db, q.sppg_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<Dokumen> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Dokumen> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Dokumen> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn review(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Dokumen> {
    action::review(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dokumen-sppg", get(list).post(create))
        .route("/api/dokumen-sppg/:id", get(get_one).put(update).delete(delete))
        .route("/api/dokumen-sppg/:id/review", post(review))
}
