use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::peringatan::{self, CreatePeringatan, FilterPeringatan, ResolvePeringatan, UpdatePeringatan};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::alerts;
use crate::services::peringatan as svc;
use crate::services::peringatan::{DashboardSummary, PeringatanPage, PeringatanWithSppg};

const SCOPE: &str = "peringatan";

/// `raw` holds the query parameters (page, limit, filters).
pub async fn list(db: &DatabaseConnection, raw: &Value) -> ActionResponse<PeringatanPage> {
    run(SCOPE, Operation::List, async { svc::list(db, &FilterPeringatan::parse(raw)?).await }).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<PeringatanWithSppg> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<peringatan::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreatePeringatan::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<peringatan::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdatePeringatan::parse(raw)?).await }).await
}

pub async fn resolve(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<peringatan::Model> {
    run(SCOPE, Operation::Resolve, async { svc::resolve(db, actor, id, ResolvePeringatan::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}

pub async fn dashboard_summary(db: &DatabaseConnection, organisasi_id: Option<Uuid>) -> ActionResponse<DashboardSummary> {
    run(SCOPE, Operation::Summary, svc::dashboard_summary(db, organisasi_id)).await
}

/// Number of alerts created by this run.
pub async fn generate(db: &DatabaseConnection) -> ActionResponse<u64> {
    run(SCOPE, Operation::Generate, alerts::generate_automatic_alerts(db, Utc::now())).await
}
