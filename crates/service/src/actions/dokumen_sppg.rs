use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::dokumen_sppg::{self, CreateDokumenSppg, ReviewDokumen, UpdateDokumenSppg};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::dokumen_sppg as svc;

const SCOPE: &str = "dokumen_sppg";

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> ActionResponse<Vec<dokumen_sppg::Model>> {
    run(SCOPE, Operation::List, svc::list(db, sppg_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<dokumen_sppg::Model> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<dokumen_sppg::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateDokumenSppg::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<dokumen_sppg::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateDokumenSppg::parse(raw)?).await }).await
}

pub async fn review(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<dokumen_sppg::Model> {
    run(SCOPE, Operation::Review, async { svc::review(db, actor, id, ReviewDokumen::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
