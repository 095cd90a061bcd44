use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::pemasok::{self, CreatePemasok, UpdatePemasok};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::pemasok as svc;

const SCOPE: &str = "pemasok";

pub async fn list(db: &DatabaseConnection) -> ActionResponse<Vec<pemasok::Model>> {
    run(SCOPE, Operation::List, svc::list(db)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<pemasok::Model> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<pemasok::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreatePemasok::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<pemasok::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdatePemasok::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
