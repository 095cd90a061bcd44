use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::checklist_harian::{self, CreateChecklistHarian, ReviewChecklist, UpdateChecklistHarian};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::checklist_harian as svc;

const SCOPE: &str = "checklist_harian";

type Checklist = checklist_harian::Model;

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> ActionResponse<Vec<Checklist>> {
    run(SCOPE, Operation::List, svc::list(db, sppg_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<Checklist> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Checklist> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateChecklistHarian::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Checklist> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateChecklistHarian::parse(raw)?).await }).await
}

pub async fn submit(db: &DatabaseConnection, actor: &Actor, id: Uuid) -> ActionResponse<Checklist> {
    run(SCOPE, Operation::Submit, svc::submit(db, actor, id)).await
}

pub async fn review(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Checklist> {
    run(SCOPE, Operation::Review, async { svc::review(db, actor, id, ReviewChecklist::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
