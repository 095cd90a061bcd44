use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::laporan_bahan_baku::Model as Laporan;
use service::actions::laporan_bahan_baku as action;
use service::services::laporan_bahan_baku::LaporanWithPemasok;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<LaporanWithPemasok>> {
    action::list(&s.db, q.sppg_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<LaporanWithPemasok> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Laporan> {
    action::create(&s.db, &actor, &body).await.into()
}

#[utoipa::path(post, path = "/api/laporan-bahan-baku/bulk", tag = "laporan", request_body = crate::openapi::BulkLaporanRequest,
    responses((status = 200, description = "All rows stored or none"), (status = 422, description = "Invalid fields")))]
pub async fn create_bulk(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Vec<Laporan>> {
    action::create_bulk(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Laporan> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/laporan-bahan-baku", get(list).post(create))
        .route("/api/laporan-bahan-baku/bulk", post(create_bulk))
        .route("/api/laporan-bahan-baku/:id", get(get_one).put(update).delete(delete))
}
