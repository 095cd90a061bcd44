use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::kegiatan_pengolahan::{
    self, CompleteKegiatan, CreateKegiatanPengolahan, UpdateKegiatanPengolahan, UpdateStatusKegiatan,
};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "kegiatan_pengolahan";

pub async fn list(
    db: &DatabaseConnection,
    sppg_id: Option<Uuid>,
) -> Result<Vec<kegiatan_pengolahan::Model>, ServiceError> {
    let mut q = kegiatan_pengolahan::Entity::find();
    if let Some(sppg) = sppg_id {
        q = q.filter(kegiatan_pengolahan::Column::SppgId.eq(sppg));
    }
    Ok(q.order_by_desc(kegiatan_pengolahan::Column::TanggalPengolahan)
        .order_by_desc(kegiatan_pengolahan::Column::JamMulai)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<kegiatan_pengolahan::Model>, ServiceError> {
    Ok(kegiatan_pengolahan::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateKegiatanPengolahan,
) -> Result<kegiatan_pengolahan::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateKegiatanPengolahan,
) -> Result<kegiatan_pengolahan::Model, ServiceError> {
    let current = find_existing::<kegiatan_pengolahan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, status = ?input.status_kegiatan))]
pub async fn complete(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: CompleteKegiatan,
) -> Result<kegiatan_pengolahan::Model, ServiceError> {
    let current = find_existing::<kegiatan_pengolahan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, status = ?input.status_kegiatan))]
pub async fn update_status(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateStatusKegiatan,
) -> Result<kegiatan_pengolahan::Model, ServiceError> {
    let current = find_existing::<kegiatan_pengolahan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<kegiatan_pengolahan::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_menu, seed_organisasi, seed_sppg};
    use models::enums::{JenisPengolahan, StatusKegiatan};
    use serde_json::json;

    async fn seeded() -> anyhow::Result<(sea_orm::DatabaseConnection, Uuid, Uuid)> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        Ok((db, unit.id, menu.id))
    }

    fn session(sppg_id: Uuid, menu_id: Uuid) -> serde_json::Value {
        json!({
            "tanggalPengolahan": "2024-03-01",
            "jamMulai": "2024-03-01T06:00:00+07:00",
            "jenisPengolahan": "MAKAN_SIANG",
            "targetPorsi": 300,
            "metodePengolahan": "Kukus",
            "penanggungJawab": "Bu Sri",
            "sppgId": sppg_id.to_string(),
            "menuHarianId": menu_id.to_string(),
        })
    }

    #[tokio::test]
    async fn starts_in_preparation_then_completes() -> Result<(), anyhow::Error> {
        let (db, sppg_id, menu_id) = seeded().await?;
        let actor = operator();
        let created = create(&db, &actor, CreateKegiatanPengolahan::parse(&session(sppg_id, menu_id))?).await?;
        assert_eq!(created.status_kegiatan, StatusKegiatan::Persiapan);
        assert!(created.jam_selesai.is_none());

        let running = update_status(
            &db,
            &actor,
            created.id,
            UpdateStatusKegiatan::parse(&json!({ "statusKegiatan": "BERLANGSUNG", "catatan": "Mulai masak" }))?,
        )
        .await?;
        assert_eq!(running.status_kegiatan, StatusKegiatan::Berlangsung);
        assert_eq!(running.catatan_proses.as_deref(), Some("Mulai masak"));

        let done = complete(
            &db,
            &actor,
            created.id,
            CompleteKegiatan::parse(&json!({
                "jamSelesai": "2024-03-01T10:30:00+07:00",
                "porsiTerealisasi": 295,
                "statusKegiatan": "SELESAI",
                "catatanMutu": "Baik",
            }))?,
        )
        .await?;
        assert_eq!(done.status_kegiatan, StatusKegiatan::Selesai);
        assert_eq!(done.porsi_terealisasi, Some(295));
        assert!(done.jam_selesai.is_some());
        assert_eq!(done.catatan_proses.as_deref(), Some("Mulai masak"));
        assert_eq!(done.catatan_mutu.as_deref(), Some("Baik"));
        Ok(())
    }

    #[tokio::test]
    async fn list_scoped_to_sppg() -> Result<(), anyhow::Error> {
        let (db, sppg_id, menu_id) = seeded().await?;
        create(&db, &operator(), CreateKegiatanPengolahan::parse(&session(sppg_id, menu_id))?).await?;

        assert_eq!(list(&db, Some(sppg_id)).await?.len(), 1);
        assert!(list(&db, Some(Uuid::new_v4())).await?.is_empty());
        assert_eq!(list(&db, None).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let (db, sppg_id, menu_id) = seeded().await?;
        let actor = operator();
        let mut raw = session(sppg_id, menu_id);
        raw["suhuPengolahan"] = json!(80);
        let created = create(&db, &actor, CreateKegiatanPengolahan::parse(&raw)?).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdateKegiatanPengolahan::parse(&json!({ "targetPorsi": 250 }))?).await?;
        assert_eq!(updated.target_porsi, 250);
        assert_eq!(updated.metode_pengolahan, "Kukus");
        assert_eq!(updated.suhu_pengolahan, Some(80.0));
        assert_eq!(updated.status_kegiatan, StatusKegiatan::Persiapan);
        assert_eq!(updated.jenis_pengolahan, JenisPengolahan::MakanSiang);
        assert_eq!(updated.penanggung_jawab, "Bu Sri");
        assert_eq!(updated.jam_mulai, created.jam_mulai);
        assert_eq!((updated.sppg_id, updated.menu_harian_id), (sppg_id, menu_id));
        assert_eq!(updated.updated_by, Some(actor.user_id));

        delete(&db, created.id).await?;
        assert!(get_by_id(&db, created.id).await?.is_none());
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
