use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::laporan_bahan_baku::{self, CreateBulkLaporanBahanBaku, CreateLaporanBahanBaku, UpdateLaporanBahanBaku};
use models::pemasok;

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "laporan_bahan_baku";

/// A receipt line with its supplier.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaporanWithPemasok {
    #[serde(flatten)]
    pub laporan: laporan_bahan_baku::Model,
    pub pemasok: Option<pemasok::Model>,
}

impl From<(laporan_bahan_baku::Model, Option<pemasok::Model>)> for LaporanWithPemasok {
    fn from((laporan, pemasok): (laporan_bahan_baku::Model, Option<pemasok::Model>)) -> Self {
        Self { laporan, pemasok }
    }
}

/// Newest receipts first, supplier joined.
pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> Result<Vec<LaporanWithPemasok>, ServiceError> {
    let mut q = laporan_bahan_baku::Entity::find().find_also_related(pemasok::Entity);
    if let Some(sppg) = sppg_id {
        q = q.filter(laporan_bahan_baku::Column::SppgId.eq(sppg));
    }
    let rows = q
        .order_by_desc(laporan_bahan_baku::Column::Tanggal)
        .order_by_desc(laporan_bahan_baku::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<LaporanWithPemasok>, ServiceError> {
    let row = laporan_bahan_baku::Entity::find_by_id(id)
        .find_also_related(pemasok::Entity)
        .one(db)
        .await?;
    Ok(row.map(Into::into))
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateLaporanBahanBaku,
) -> Result<laporan_bahan_baku::Model, ServiceError> {
    let sppg_id = actor.resolve_sppg(input.sppg_id)?;
    Ok(input.into_active_model(sppg_id, actor.user_id).insert(db).await?)
}

/// All lines of one delivery in a single statement; returned in input order.
#[instrument(skip(db, input), fields(user = %actor.user_id, items = input.bahan_baku.len()))]
pub async fn create_bulk(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateBulkLaporanBahanBaku,
) -> Result<Vec<laporan_bahan_baku::Model>, ServiceError> {
    let sppg_id = actor.resolve_sppg(input.sppg_id)?;
    let rows = input.into_active_models(sppg_id, actor.user_id);
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = rows
        .iter()
        .filter_map(|am| match &am.id {
            ActiveValue::Set(id) => Some(*id),
            _ => None,
        })
        .collect();

    let txn = db.begin().await?;
    laporan_bahan_baku::Entity::insert_many(rows).exec_without_returning(&txn).await?;
    let stored = laporan_bahan_baku::Entity::find()
        .filter(laporan_bahan_baku::Column::Id.is_in(ids.clone()))
        .all(&txn)
        .await?;
    txn.commit().await?;

    let mut by_id: HashMap<Uuid, laporan_bahan_baku::Model> = stored.into_iter().map(|m| (m.id, m)).collect();
    let out: Vec<_> = ids.iter().filter_map(|id| by_id.remove(id)).collect();
    info!(sppg_id = %sppg_id, count = out.len(), "bulk receipt stored");
    Ok(out)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateLaporanBahanBaku,
) -> Result<laporan_bahan_baku::Model, ServiceError> {
    let current = find_existing::<laporan_bahan_baku::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<laporan_bahan_baku::Entity, _>(db, id, ENTITY).await
}
