use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde_json::Value;
use uuid::Uuid;

use models::peringatan::Model as Peringatan;
use service::actions::peringatan as action;
use service::services::peringatan::{DashboardSummary, PeringatanPage, PeringatanWithSppg};
use service::Actor;

use super::{query_value, ScopeQuery};
use crate::envelope::Envelope;
use crate::middlewares::{require_cron_secret, require_session};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/peringatan", tag = "peringatan",
    params(
        ("page" = Option<u64>, Query, description = "1-based page"),
        ("limit" = Option<u64>, Query, description = "Page size, 1..100"),
        ("jenisPeringatan" = Option<String>, Query, description = "Alert kind"),
        ("tingkatPrioritas" = Option<String>, Query, description = "Priority"),
        ("statusPeringatan" = Option<String>, Query, description = "Status"),
        ("search" = Option<String>, Query, description = "Title, description, unit or organization name"),
        ("showResolved" = Option<bool>, Query, description = "Include closed alerts"),
    ),
    responses((status = 200, description = "One page, most urgent first"), (status = 422, description = "Invalid filter")))]
pub async fn list(State(s): State<AppState>, Query(params): Query<HashMap<String, String>>) -> Envelope<PeringatanPage> {
    action::list(&s.db, &query_value(params)).await.into()
}

async fn summary(State(s): State<AppState>, Query(q): Query<ScopeQuery>) -> Envelope<DashboardSummary> {
    action::dashboard_summary(&s.db, q.organisasi_id).await.into()
}

async fn get_one(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<PeringatanWithSppg> {
    action::get(&s.db, id).await.into()
}

async fn create(State(s): State<AppState>, Extension(actor): Extension<Actor>, Json(body): Json<Value>) -> Envelope<Peringatan> {
    action::create(&s.db, &actor, &body).await.into()
}

async fn update(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Peringatan> {
    action::update(&s.db, &actor, id, &body).await.into()
}

async fn resolve(
    State(s): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Envelope<Peringatan> {
    action::resolve(&s.db, &actor, id, &body).await.into()
}

async fn delete(State(s): State<AppState>, Path(id): Path<Uuid>) -> Envelope<()> {
    action::delete(&s.db, id).await.into()
}

#[utoipa::path(post, path = "/api/peringatan/generate-alerts", tag = "peringatan",
    responses((status = 200, description = "Number of alerts created"), (status = 401, description = "Missing or invalid credentials"), (status = 403, description = "No cron secret configured (GET)")))]
pub async fn generate(State(s): State<AppState>) -> Envelope<u64> {
    action::generate(&s.db).await.into()
}

/// GET is the scheduler's entry (cron secret), POST the dashboard's (session).
pub fn generate_routes(state: AppState) -> Router<AppState> {
    let by_scheduler = get(generate).route_layer(middleware::from_fn_with_state(state.clone(), require_cron_secret));
    let by_dashboard = post(generate).route_layer(middleware::from_fn_with_state(state, require_session));
    Router::new().route("/api/peringatan/generate-alerts", by_scheduler.merge(by_dashboard))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/peringatan", get(list).post(create))
        .route("/api/peringatan/summary", get(summary))
        .route("/api/peringatan/:id", get(get_one).put(update).delete(delete))
        .route("/api/peringatan/:id/resolve", post(resolve))
}
