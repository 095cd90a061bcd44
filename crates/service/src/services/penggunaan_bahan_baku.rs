use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::penggunaan_bahan_baku::{self, CreatePenggunaanBahanBaku, UpdatePenggunaanBahanBaku};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "penggunaan_bahan_baku";

pub async fn list(
    db: &DatabaseConnection,
    kegiatan_id: Option<Uuid>,
) -> Result<Vec<penggunaan_bahan_baku::Model>, ServiceError> {
    let mut q = penggunaan_bahan_baku::Entity::find();
    if let Some(id) = kegiatan_id {
        q = q.filter(penggunaan_bahan_baku::Column::KegiatanPengolahanId.eq(id));
    }
    Ok(q.order_by_desc(penggunaan_bahan_baku::Column::CreatedAt).all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<penggunaan_bahan_baku::Model>, ServiceError> {
    Ok(penggunaan_bahan_baku::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, bahan = %input.nama_bahan))]
pub async fn create(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreatePenggunaanBahanBaku,
) -> Result<penggunaan_bahan_baku::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdatePenggunaanBahanBaku,
) -> Result<penggunaan_bahan_baku::Model, ServiceError> {
    let current = find_existing::<penggunaan_bahan_baku::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<penggunaan_bahan_baku::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_kegiatan, seed_menu, seed_organisasi, seed_sppg};
    use models::enums::{JenisBahan, KondisiBahan};
    use serde_json::json;

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let kegiatan = seed_kegiatan(&db, unit.id, menu.id).await?;
        let actor = operator();

        let input = CreatePenggunaanBahanBaku::parse(&json!({
            "namaBahan": "Ayam",
            "jenisBahan": "PROTEIN_HEWANI",
            "jumlahDigunakan": 12.5,
            "satuan": "kg",
            "batchNumber": "B-0301",
            "tanggalExpiry": "2024-03-04",
            "kondisiBahan": "SANGAT_BAIK",
            "kegiatanPengolahanId": kegiatan.id.to_string(),
        }))?;
        let created = create(&db, &actor, input).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(
            &db,
            &actor,
            created.id,
            UpdatePenggunaanBahanBaku::parse(&json!({ "jumlahDigunakan": 11, "catatanPenggunaan": "Sisa 1.5 kg" }))?,
        )
        .await?;
        assert_eq!(updated.jumlah_digunakan, 11.0);
        assert_eq!(updated.catatan_penggunaan.as_deref(), Some("Sisa 1.5 kg"));
        assert_eq!(updated.nama_bahan, "Ayam");
        assert_eq!(updated.jenis_bahan, JenisBahan::ProteinHewani);
        assert_eq!(updated.kondisi_bahan, KondisiBahan::SangatBaik);
        assert_eq!(updated.batch_number.as_deref(), Some("B-0301"));
        assert_eq!(updated.tanggal_expiry, created.tanggal_expiry);

        assert_eq!(list(&db, Some(kegiatan.id)).await?.len(), 1);
        delete(&db, created.id).await?;
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert!(list(&db, None).await?.is_empty());
        Ok(())
    }
}
