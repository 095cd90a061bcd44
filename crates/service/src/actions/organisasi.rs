use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::organisasi::{self, CreateOrganisasi, UpdateOrganisasi};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::organisasi as svc;
use crate::services::organisasi::OrganisasiOption;

const SCOPE: &str = "organisasi";

pub async fn list(db: &DatabaseConnection) -> ActionResponse<Vec<organisasi::Model>> {
    run(SCOPE, Operation::List, svc::list(db)).await
}

pub async fn list_options(db: &DatabaseConnection) -> ActionResponse<Vec<OrganisasiOption>> {
    run(SCOPE, Operation::List, svc::list_options(db)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<organisasi::Model> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<organisasi::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateOrganisasi::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<organisasi::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateOrganisasi::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
