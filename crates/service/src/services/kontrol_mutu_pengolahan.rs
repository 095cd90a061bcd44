use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::kontrol_mutu_pengolahan::{self, CreateKontrolMutu, UpdateKontrolMutu};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "kontrol_mutu_pengolahan";

/// Checks of one session, or of all sessions, latest first.
pub async fn list(
    db: &DatabaseConnection,
    kegiatan_id: Option<Uuid>,
) -> Result<Vec<kontrol_mutu_pengolahan::Model>, ServiceError> {
    let mut q = kontrol_mutu_pengolahan::Entity::find();
    if let Some(id) = kegiatan_id {
        q = q.filter(kontrol_mutu_pengolahan::Column::KegiatanPengolahanId.eq(id));
    }
    Ok(q.order_by_desc(kontrol_mutu_pengolahan::Column::WaktuKontrol).all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<kontrol_mutu_pengolahan::Model>, ServiceError> {
    Ok(kontrol_mutu_pengolahan::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, status = ?input.status_mutu))]
pub async fn create(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateKontrolMutu,
) -> Result<kontrol_mutu_pengolahan::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateKontrolMutu,
) -> Result<kontrol_mutu_pengolahan::Model, ServiceError> {
    let current = find_existing::<kontrol_mutu_pengolahan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<kontrol_mutu_pengolahan::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_kegiatan, seed_menu, seed_organisasi, seed_sppg};
    use models::enums::{StatusMutu, TahapPengolahan};
    use serde_json::json;

    fn check(kegiatan_id: Uuid, waktu: &str) -> serde_json::Value {
        json!({
            "waktuKontrol": waktu,
            "tahapPengolahan": "PEMASAKAN",
            "suhu": 82,
            "kebersihanAlat": true,
            "higienePetugas": true,
            "statusMutu": "BAIK",
            "fotoEvidence": ["mutu/panci.jpg"],
            "petugasKontrol": "Pak Budi",
            "kegiatanPengolahanId": kegiatan_id.to_string(),
        })
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let kegiatan = seed_kegiatan(&db, unit.id, menu.id).await?;
        let actor = operator();

        let created = create(&db, &actor, CreateKontrolMutu::parse(&check(kegiatan.id, "2024-03-01T08:00:00+07:00"))?).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(
            &db,
            &actor,
            created.id,
            UpdateKontrolMutu::parse(&json!({ "statusMutu": "PERLU_PERBAIKAN", "tindakanKoreksi": "Masak ulang" }))?,
        )
        .await?;
        assert_eq!(updated.status_mutu, StatusMutu::PerluPerbaikan);
        assert_eq!(updated.tindakan_koreksi.as_deref(), Some("Masak ulang"));
        assert_eq!(updated.tahap_pengolahan, TahapPengolahan::Pemasakan);
        assert_eq!(updated.suhu, Some(82.0));
        assert_eq!(updated.foto_evidence, created.foto_evidence);
        assert_eq!(updated.petugas_kontrol, "Pak Budi");
        assert_eq!(updated.kegiatan_pengolahan_id, kegiatan.id);

        delete(&db, created.id).await?;
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn list_scoped_to_kegiatan_latest_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let kegiatan = seed_kegiatan(&db, unit.id, menu.id).await?;
        let actor = operator();
        let early = create(&db, &actor, CreateKontrolMutu::parse(&check(kegiatan.id, "2024-03-01T07:00:00+07:00"))?).await?;
        let late = create(&db, &actor, CreateKontrolMutu::parse(&check(kegiatan.id, "2024-03-01T09:00:00+07:00"))?).await?;

        let ids: Vec<Uuid> = list(&db, Some(kegiatan.id)).await?.into_iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![late.id, early.id]);
        assert!(list(&db, Some(Uuid::new_v4())).await?.is_empty());

        let orphan = create(&db, &actor, CreateKontrolMutu::parse(&check(Uuid::new_v4(), "2024-03-01T09:00:00+07:00"))?)
            .await
            .unwrap_err();
        assert_eq!(orphan.kind(), ErrorKind::ConstraintViolation);
        Ok(())
    }
}
