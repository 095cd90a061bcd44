use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::penggunaan_bahan_baku::{self, CreatePenggunaanBahanBaku, UpdatePenggunaanBahanBaku};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::penggunaan_bahan_baku as svc;

const SCOPE: &str = "penggunaan_bahan_baku";

type Penggunaan = penggunaan_bahan_baku::Model;

pub async fn list(db: &DatabaseConnection, kegiatan_id: Option<Uuid>) -> ActionResponse<Vec<Penggunaan>> {
    run(SCOPE, Operation::List, svc::list(db, kegiatan_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<Penggunaan> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Penggunaan> {
    run(SCOPE, Operation::Create, async {
        svc::create(db, actor, CreatePenggunaanBahanBaku::parse(raw)?).await
    })
    .await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Penggunaan> {
    run(SCOPE, Operation::Update, async {
        svc::update(db, actor, id, UpdatePenggunaanBahanBaku::parse(raw)?).await
    })
    .await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
