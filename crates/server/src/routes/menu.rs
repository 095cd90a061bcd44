//! Daily menus and their ingredient components.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::{komponen_menu, menu_harian};
use service::actions::{komponen_menu as komponen, menu_harian as menu};
use service::services::menu_harian::MenuWithKomponen;
use service::Actor;

use super::ScopeQuery;
use crate::envelope::Envelope;
use crate::state::AppState;

async fn list(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<menu_harian::Model>> {
    menu::list(&s.db, q.sppg_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<menu_harian::Model> {
    menu::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<menu_harian::Model> {
    menu::create(&s.db, &actor, &body).await.into()
}

#[utoipa::path(post, path = "/api/menu-harian/with-komponen", tag = "menu", request_body = crate::openapi::MenuWithKomponenRequest,
    responses((status = 200, description = "Menu and components stored in one transaction"), (status = 422, description = "Invalid fields")))]
pub async fn create_with_komponen(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(body): Json<Value>,
) -> Envelope<MenuWithKomponen> {
    menu::create_with_komponen(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<menu_harian::Model> {
    menu::update(&s.db, &actor, id, &body).await.into()
}

async fn evaluate_akg(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<menu_harian::Model> {
    menu::evaluate_akg(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    menu::delete(&s.db, id).await.into()
}

async fn komponen_of_menu(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<Vec<komponen_menu::Model>> {
    komponen::list(&s.db, Some(id)).await.into()
}

async fn list_komponen(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<Vec<komponen_menu::Model>> {
    komponen::list(&s.db, q.menu_harian_id).await.into()
}

async fn get_komponen(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<komponen_menu::Model> {
    komponen::get(&s.db, id).await.into()
}

async fn create_komponen(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(body): Json<Value>,
) -> Envelope<komponen_menu::Model> {
    komponen::create(&s.db, &actor, &body).await.into()
}

async fn update_komponen(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<komponen_menu::Model> {
    komponen::update(&s.db, &actor, id, &body).await.into()
}

async fn delete_komponen(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    komponen::delete(&s.db, id).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/menu-harian", get(list).post(create))
        .route("/api/menu-harian/with-komponen", post(create_with_komponen))
        .route("/api/menu-harian/:id", get(get_one).put(update).delete(delete))
        .route("/api/menu-harian/:id/evaluate-akg", post(evaluate_akg))
        .route("/api/menu-harian/:id/komponen", get(komponen_of_menu))
        .route("/api/komponen-menu", get(list_komponen).post(create_komponen))
        .route("/api/komponen-menu/:id", get(get_komponen).put(update_komponen).delete(delete_komponen))
}
