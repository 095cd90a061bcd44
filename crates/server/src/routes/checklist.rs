use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::checklist_harian::Model as Checklist;
use service::actions::checklist_harian as action;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<Checklist>> {
    action::list(&s.db, q.sppg_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<Checklist> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Checklist> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Checklist> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn submit(State(s): State<AppState>, Extension(actor): Extension<Actor>, Path(id): Path<Uuid>) -> Envelope<Checklist> {
    action::submit(&s.db, &actor, id).await.into()
}

async fn review(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Checklist> {
    action::review(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/checklist-harian", get(list).post(create))
        .route("/api/checklist-harian/:id", get(get_one).put(update).delete(delete))
        .route("/api/checklist-harian/:id/submit", post(submit))
        .route("/api/checklist-harian/:id/review", post(review))
}
