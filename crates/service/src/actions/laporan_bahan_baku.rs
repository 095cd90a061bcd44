use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::laporan_bahan_baku::{self, CreateBulkLaporanBahanBaku, CreateLaporanBahanBaku, UpdateLaporanBahanBaku};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::laporan_bahan_baku as svc;
use crate::services::laporan_bahan_baku::LaporanWithPemasok;

const SCOPE: &str = "laporan_bahan_baku";

type Laporan = laporan_bahan_baku::Model;

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> ActionResponse<Vec<LaporanWithPemasok>> {
    run(SCOPE, Operation::List, svc::list(db, sppg_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<LaporanWithPemasok> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Laporan> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateLaporanBahanBaku::parse(raw)?).await }).await
}

pub async fn create_bulk(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Vec<Laporan>> {
    run(SCOPE, Operation::Create, async {
        svc::create_bulk(db, actor, CreateBulkLaporanBahanBaku::parse(raw)?).await
    })
    .await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<Laporan> {
    run(SCOPE, Operation::Update, async {
        svc::update(db, actor, id, UpdateLaporanBahanBaku::parse(raw)?).await
    })
    .await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
