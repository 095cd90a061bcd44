use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::kontrol_mutu_pengolahan::{self, CreateKontrolMutu, UpdateKontrolMutu};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::kontrol_mutu_pengolahan as svc;

const SCOPE: &str = "kontrol_mutu_pengolahan";

type KontrolMutu = kontrol_mutu_pengolahan::Model;

pub async fn list(db: &DatabaseConnection, kegiatan_id: Option<Uuid>) -> ActionResponse<Vec<KontrolMutu>> {
    run(SCOPE, Operation::List, svc::list(db, kegiatan_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<KontrolMutu> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<KontrolMutu> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateKontrolMutu::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<KontrolMutu> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateKontrolMutu::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
