use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::kegiatan_pengolahan::{
    self, CompleteKegiatan, CreateKegiatanPengolahan, UpdateKegiatanPengolahan, UpdateStatusKegiatan,
};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::kegiatan_pengolahan as svc;

const SCOPE: &str = "kegiatan_pengolahan";

type Kegiatan = kegiatan_pengolahan::Model;

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> ActionResponse<Vec<Kegiatan>> {
    run(SCOPE, Operation::List, svc::list(db, sppg_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<Kegiatan> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Kegiatan> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateKegiatanPengolahan::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Kegiatan> {
    run(SCOPE, Operation::Update, async {
        svc::update(db, actor, id, UpdateKegiatanPengolahan::parse(raw)?).await
    })
    .await
}

pub async fn complete(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Kegiatan> {
    run(SCOPE, Operation::Complete, async { svc::complete(db, actor, id, CompleteKegiatan::parse(raw)?).await }).await
}

pub async fn update_status(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Kegiatan> {
    run(SCOPE, Operation::Update, async {
        svc::update_status(db, actor, id, UpdateStatusKegiatan::parse(raw)?).await
    })
    .await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
