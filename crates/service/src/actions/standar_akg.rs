use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::standar_akg::{self, AkgEvaluation, CreateStandarAkg, UpdateStandarAkg, ValidateAkg};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::standar_akg as svc;

const SCOPE: &str = "standar_akg";

type StandarAkg = standar_akg::Model;

pub async fn list(db: &DatabaseConnection, active_only: bool) -> ActionResponse<Vec<StandarAkg>> {
    run(SCOPE, Operation::List, svc::list(db, active_only)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<StandarAkg> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<StandarAkg> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateStandarAkg::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<StandarAkg> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateStandarAkg::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}

pub async fn validate(db: &DatabaseConnection, raw: &Value) -> ActionResponse<AkgEvaluation> {
    run(SCOPE, Operation::Evaluate, async { svc::validate(db, ValidateAkg::parse(raw)?).await }).await
}
