use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::kontrol_mutu_pengolahan::Model as KontrolMutu;
use service::actions::kontrol_mutu_pengolahan as action;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<KontrolMutu>> {
    action::list(&s.db, q.kegiatan_pengolahan_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<KontrolMutu> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<KontrolMutu> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<KontrolMutu> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/kontrol-mutu-pengolahan", get(list).post(create))
        .route("/api/kontrol-mutu-pengolahan/:id", get(get_one).put(update).delete(delete))
}
