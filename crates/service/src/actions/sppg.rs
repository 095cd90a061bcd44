use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::sppg::{self, CreateSppg, UpdateSppg, VerifySppg};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::peta::{self, SppgLokasi};
use crate::services::sppg as svc;
use crate::services::sppg::{SppgStats, SppgWithOrganisasi};

const SCOPE: &str = "sppg";

pub async fn list(db: &DatabaseConnection, organisasi_id: Option<Uuid>) -> ActionResponse<Vec<sppg::Model>> {
    run(SCOPE, Operation::List, svc::list(db, organisasi_id)).await
}

pub async fn list_by_organisasi(db: &DatabaseConnection, organisasi_id: Uuid) -> ActionResponse<Vec<sppg::Model>> {
    run(SCOPE, Operation::List, svc::list_by_organisasi(db, organisasi_id)).await
}

pub async fn list_for_map(db: &DatabaseConnection) -> ActionResponse<Vec<SppgWithOrganisasi>> {
    run(SCOPE, Operation::List, svc::list_for_map(db)).await
}

/// Public map feed.
pub async fn peta(db: &DatabaseConnection) -> ActionResponse<Vec<SppgLokasi>> {
    run(SCOPE, Operation::List, peta::list_lokasi(db)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<SppgWithOrganisasi> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn stats(db: &DatabaseConnection) -> ActionResponse<SppgStats> {
    run(SCOPE, Operation::Summary, svc::stats(db)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<sppg::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateSppg::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<sppg::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateSppg::parse(raw)?).await }).await
}

pub async fn verify(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<sppg::Model> {
    run(SCOPE, Operation::Verify, async { svc::verify(db, actor, id, VerifySppg::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
