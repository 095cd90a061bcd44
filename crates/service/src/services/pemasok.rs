use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::pemasok::{self, CreatePemasok, UpdatePemasok};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "pemasok";

pub async fn list(db: &DatabaseConnection) -> Result<Vec<pemasok::Model>, ServiceError> {
    Ok(pemasok::Entity::find()
        .order_by_asc(pemasok::Column::Nama)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<pemasok::Model>, ServiceError> {
    Ok(pemasok::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreatePemasok) -> Result<pemasok::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: UpdatePemasok) -> Result<pemasok::Model, ServiceError> {
    let current = find_existing::<pemasok::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<pemasok::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use models::enums::{JenisPemasok, StatusAktif};
    use serde_json::json;

    use crate::test_support::{get_db, operator, seed_pemasok};

    #[tokio::test]
    async fn sorted_by_name_with_certificates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_pemasok(&db, "Tani Makmur").await?;
        let input = CreatePemasok::parse(&json!({
            "nama": "Bahari Jaya",
            "alamat": "Pelabuhan",
            "jenisPemasok": "IKAN",
            "sertifikat": ["HALAL-01", "PIRT-02"],
        }))?;
        let ikan = create(&db, &operator(), input).await?;
        assert_eq!(ikan.jenis_pemasok, JenisPemasok::Ikan);
        assert_eq!(ikan.status_aktif, StatusAktif::Aktif);
        assert_eq!(ikan.sertifikat.len(), 2);

        let names: Vec<String> = list(&db).await?.into_iter().map(|p| p.nama).collect();
        assert_eq!(names, vec!["Bahari Jaya".to_string(), "Tani Makmur".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn deactivate_keeps_other_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let p = seed_pemasok(&db, "Tani Makmur").await?;
        let updated = update(&db, &operator(), p.id, UpdatePemasok::parse(&json!({ "statusAktif": "NON_AKTIF" }))?).await?;
        assert_eq!(updated.status_aktif, StatusAktif::NonAktif);
        assert_eq!(updated.alamat, p.alamat);
        assert_eq!(updated.jenis_pemasok, p.jenis_pemasok);

        delete(&db, p.id).await?;
        assert!(get_by_id(&db, p.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let actor = operator();
        let input = CreatePemasok::parse(&json!({
            "nama": "Koperasi Susu",
            "alamat": "Jl. Peternak 3",
            "kontak": "0812",
            "jenisPemasok": "LAINNYA",
            "sertifikat": ["HALAL-09"],
        }))?;
        let created = create(&db, &actor, input).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdatePemasok::parse(&json!({ "kontak": "0813" }))?).await?;
        assert_eq!(updated.kontak.as_deref(), Some("0813"));
        assert_eq!(updated.nama, "Koperasi Susu");
        assert_eq!(updated.alamat, created.alamat);
        assert_eq!(updated.jenis_pemasok, JenisPemasok::Lainnya);
        assert_eq!(updated.status_aktif, StatusAktif::Aktif);
        assert_eq!(updated.sertifikat, created.sertifikat);

        delete(&db, created.id).await?;
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
