//! Dashboard analytics, one endpoint per page.

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use service::actions::dashboard as action;
use service::services::dashboard::{
    DashboardOverview, GeographicAnalytics, NutritionAnalytics, OperationalAnalytics, SupplyChainAnalytics,
};

use crate::envelope::Envelope;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/dashboard/overview", tag = "dashboard",
    responses((status = 200, description = "Headline counters and today's compliance rates")))]
pub async fn overview(State(s): State<AppState>) -> Envelope<DashboardOverview> {
    action::overview(&s.db).await.into()
}

async fn operational(State(s): State<AppState>) -> Envelope<OperationalAnalytics> {
    action::operational(&s.db).await.into()
}

async fn nutrition(State(s): State<AppState>) -> Envelope<NutritionAnalytics> {
    action::nutrition(&s.db).await.into()
}

async fn supply_chain(State(s): State<AppState>) -> Envelope<SupplyChainAnalytics> {
    action::supply_chain(&s.db).await.into()
}

async fn geographic(State(s): State<AppState>) -> Envelope<GeographicAnalytics> {
    action::geographic(&s.db).await.into()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/overview", get(overview))
        .route("/api/dashboard/operational", get(operational))
        .route("/api/dashboard/nutrition", get(nutrition))
        .route("/api/dashboard/supply-chain", get(supply_chain))
        .route("/api/dashboard/geographic", get(geographic))
}
