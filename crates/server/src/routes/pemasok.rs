use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::pemasok;
use service::actions::pemasok as action;
use service::Actor;

use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>) -> Envelope<Vec<pemasok::Model>> {
    action::list(&s.db).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<pemasok::Model> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<pemasok::Model> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<pemasok::Model> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/pemasok", get(list).post(create))
        .route("/api/pemasok/:id", get(get_one).put(update).delete(delete))
}
