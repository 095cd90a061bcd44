//! Store operations, one function per entity operation.
//!
//! Each function takes the connection explicitly and returns the stored
//! model; callers wrap them in [`crate::action::run`].

pub mod organisasi;
pub mod sppg;
pub mod pemasok;
pub mod menu_harian;
pub mod komponen_menu;
pub mod kegiatan_pengolahan;
pub mod laporan_bahan_baku;
pub mod dokumen_sppg;
pub mod checklist_harian;
pub mod peringatan;
pub mod standar_akg;
pub mod kontrol_mutu_pengolahan;
pub mod penggunaan_bahan_baku;
pub mod notifikasi_peringatan;
pub mod dashboard;

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Fetch a row that has to exist for the operation to continue.
pub(crate) async fn find_existing<E, C>(db: &C, id: Uuid, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(entity))
}

/// Hard delete; a missing row is `NotFound`, a referenced one `ConstraintViolation`.
pub(crate) async fn delete_existing<E, C>(db: &C, id: Uuid, entity: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let res = E::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(entity));
    }
    Ok(())
}
