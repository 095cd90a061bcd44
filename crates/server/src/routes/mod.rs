use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use sea_orm::ConnectionTrait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use common::types::Health;

use crate::middlewares::require_session;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod auth;
pub mod checklist;
pub mod dashboard;
pub mod dokumen;
pub mod kegiatan;
pub mod kontrol_mutu;
pub mod laporan;
pub mod menu;
pub mod notifikasi;
pub mod organisasi;
pub mod pemasok;
pub mod penggunaan;
pub mod peringatan;
pub mod peta;
pub mod sppg;
pub mod standar_akg;

/// Optional scope filters shared by list endpoints.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    pub sppg_id: Option<Uuid>,
    pub organisasi_id: Option<Uuid>,
    pub menu_harian_id: Option<Uuid>,
    pub kegiatan_pengolahan_id: Option<Uuid>,
    pub active_only: Option<bool>,
}

// Flags arrive as strings in a query; the schema layer wants JSON booleans.
const BOOLEAN_PARAMS: &[&str] = &["showResolved", "unreadOnly"];

/// Query parameters as the JSON object the schema parsers take.
pub fn query_value(params: HashMap<String, String>) -> Value {
    let map: Map<String, Value> = params
        .into_iter()
        .map(|(k, v)| {
            let value = match (BOOLEAN_PARAMS.contains(&k.as_str()), v.as_str()) {
                (true, "true") => Value::Bool(true),
                (true, "false") => Value::Bool(false),
                _ => Value::String(v),
            };
            (k, value)
        })
        .collect();
    Value::Object(map)
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service and database up"), (status = 503, description = "Database unreachable")))]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => (StatusCode::OK, Json(Health { status: "ok", database: "up" })),
        Err(e) => {
            warn!(error = %e, "health check: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "degraded", database: "down" }))
        }
    }
}

async fn metrics() -> impl IntoResponse {
    common::metrics::encode_metrics()
}

/// Every route of the dashboard backend.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(auth::public_routes())
        .merge(peta::routes())
        .merge(peringatan::generate_routes(state.clone()));

    let protected = Router::new()
        .merge(auth::session_routes())
        .merge(organisasi::routes())
        .merge(sppg::routes())
        .merge(pemasok::routes())
        .merge(menu::routes())
        .merge(kegiatan::routes())
        .merge(laporan::routes())
        .merge(dokumen::routes())
        .merge(checklist::routes())
        .merge(peringatan::routes())
        .merge(notifikasi::routes())
        .merge(standar_akg::routes())
        .merge(kontrol_mutu::routes())
        .merge(penggunaan::routes())
        .merge(dashboard::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
