use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::action::{run, ActionResponse, Operation};
use crate::services::dashboard as svc;
use crate::services::dashboard::{
    DashboardOverview, GeographicAnalytics, NutritionAnalytics, OperationalAnalytics, SupplyChainAnalytics,
};

const SCOPE: &str = "dashboard";

pub async fn overview(db: &DatabaseConnection) -> ActionResponse<DashboardOverview> {
    run(SCOPE, Operation::Summary, svc::overview(db, Utc::now())).await
}

pub async fn operational(db: &DatabaseConnection) -> ActionResponse<OperationalAnalytics> {
    run(SCOPE, Operation::Summary, svc::operational(db, Utc::now())).await
}

pub async fn nutrition(db: &DatabaseConnection) -> ActionResponse<NutritionAnalytics> {
    run(SCOPE, Operation::Summary, svc::nutrition(db, Utc::now())).await
}

pub async fn supply_chain(db: &DatabaseConnection) -> ActionResponse<SupplyChainAnalytics> {
    run(SCOPE, Operation::Summary, svc::supply_chain(db, Utc::now())).await
}

pub async fn geographic(db: &DatabaseConnection) -> ActionResponse<GeographicAnalytics> {
    run(SCOPE, Operation::Summary, svc::geographic(db)).await
}
