use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use models::enums::StatusVerifikasi;
use models::organisasi;
use models::sppg::{self, CreateSppg, UpdateSppg, VerifySppg};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "sppg";

/// A unit with its organization, fetched in one joined query.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SppgWithOrganisasi {
    #[serde(flatten)]
    pub sppg: sppg::Model,
    pub organisasi: Option<organisasi::Model>,
}

impl From<(sppg::Model, Option<organisasi::Model>)> for SppgWithOrganisasi {
    fn from((sppg, organisasi): (sppg::Model, Option<organisasi::Model>)) -> Self {
        Self { sppg, organisasi }
    }
}

/// Unit counts per verification status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SppgStats {
    pub total: i64,
    pub draft: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub suspended: i64,
}

/// Newest first, optionally within one organization.
pub async fn list(db: &DatabaseConnection, organisasi_id: Option<Uuid>) -> Result<Vec<sppg::Model>, ServiceError> {
    let mut q = sppg::Entity::find();
    if let Some(org) = organisasi_id {
        q = q.filter(sppg::Column::OrganisasiId.eq(org));
    }
    Ok(q.order_by_desc(sppg::Column::CreatedAt).all(db).await?)
}

pub async fn list_by_organisasi(db: &DatabaseConnection, organisasi_id: Uuid) -> Result<Vec<sppg::Model>, ServiceError> {
    Ok(sppg::Entity::find()
        .filter(sppg::Column::OrganisasiId.eq(organisasi_id))
        .order_by_asc(sppg::Column::Nama)
        .all(db)
        .await?)
}

/// Units that can be placed on the map, by name.
pub async fn list_for_map(db: &DatabaseConnection) -> Result<Vec<SppgWithOrganisasi>, ServiceError> {
    let rows = sppg::Entity::find()
        .find_also_related(organisasi::Entity)
        .filter(sppg::Column::Latitude.is_not_null())
        .filter(sppg::Column::Longitude.is_not_null())
        .order_by_asc(sppg::Column::Nama)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<SppgWithOrganisasi>, ServiceError> {
    let row = sppg::Entity::find_by_id(id)
        .find_also_related(organisasi::Entity)
        .one(db)
        .await?;
    Ok(row.map(Into::into))
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateSppg) -> Result<sppg::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: UpdateSppg) -> Result<sppg::Model, ServiceError> {
    let current = find_existing::<sppg::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, verdict = ?input.status_verifikasi))]
pub async fn verify(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: VerifySppg) -> Result<sppg::Model, ServiceError> {
    let current = find_existing::<sppg::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<sppg::Entity, _>(db, id, ENTITY).await
}

pub async fn stats(db: &DatabaseConnection) -> Result<SppgStats, ServiceError> {
    let counts: Vec<(StatusVerifikasi, i64)> = sppg::Entity::find()
        .select_only()
        .column(sppg::Column::StatusVerifikasi)
        .column_as(sppg::Column::Id.count(), "jumlah")
        .group_by(sppg::Column::StatusVerifikasi)
        .into_tuple()
        .all(db)
        .await?;

    let mut out = SppgStats::default();
    for (status, n) in counts {
        out.total += n;
        match status {
            StatusVerifikasi::Draft => out.draft = n,
            StatusVerifikasi::UnderReview => out.under_review = n,
            StatusVerifikasi::Approved => out.approved = n,
            StatusVerifikasi::Rejected => out.rejected = n,
            StatusVerifikasi::Suspended => out.suspended = n,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_organisasi, seed_sppg};
    use serde_json::json;

    #[tokio::test]
    async fn create_forces_draft_and_records_creator() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let actor = operator();
        let input = CreateSppg::parse(&json!({
            "nama": "SPPG Cibinong",
            "alamat": "Jl. Raya 2",
            "kapasitasProduksi": "500",
            "organisasiId": org.id.to_string(),
        }))?;

        let created = create(&db, &actor, input).await?;
        assert_eq!(created.status_verifikasi, StatusVerifikasi::Draft);
        assert_eq!(created.kapasitas_produksi, 500);
        assert_eq!(created.created_by, actor.user_id);
        assert!(created.updated_at.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_joins_organisasi() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes Depok").await?;
        let unit = seed_sppg(&db, org.id, "SPPG Beji").await?;

        let found = get_by_id(&db, unit.id).await?.expect("stored");
        assert_eq!(found.sppg, unit);
        assert_eq!(found.organisasi.map(|o| o.nama).as_deref(), Some("Dinkes Depok"));
        assert!(get_by_id(&db, Uuid::new_v4()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_touches_only_present_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG Lama").await?;
        let actor = operator();

        let updated = update(&db, &actor, unit.id, UpdateSppg::parse(&json!({ "kapasitasProduksi": 450, "kontak": null }))?).await?;
        assert_eq!(updated.kapasitas_produksi, 450);
        assert_eq!(updated.nama, "SPPG Lama");
        assert_eq!(updated.alamat, unit.alamat);
        assert_eq!(updated.latitude, unit.latitude);
        assert_eq!(updated.updated_by, Some(actor.user_id));
        assert_eq!(get_by_id(&db, unit.id).await?.map(|r| r.sppg), Some(updated));

        delete(&db, unit.id).await?;
        assert_eq!(delete(&db, unit.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn verify_sets_status_and_note() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG Uji").await?;
        let input = VerifySppg::parse(&json!({ "statusVerifikasi": "APPROVED", "catatanVerifikasi": "Lengkap" }))?;

        let verified = verify(&db, &operator(), unit.id, input).await?;
        assert_eq!(verified.status_verifikasi, StatusVerifikasi::Approved);
        assert_eq!(verified.catatan_verifikasi.as_deref(), Some("Lengkap"));
        assert_eq!(verified.nama, unit.nama);
        assert_eq!(verified.alamat, unit.alamat);
        assert_eq!(verified.kapasitas_produksi, unit.kapasitas_produksi);
        assert_eq!(verified.organisasi_id, unit.organisasi_id);
        assert_eq!((verified.latitude, verified.longitude), (unit.latitude, unit.longitude));
        assert_eq!(verified.created_by, unit.created_by);

        let missing = verify(&db, &operator(), Uuid::new_v4(), VerifySppg::parse(&json!({ "statusVerifikasi": "REJECTED" }))?)
            .await
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn create_with_unknown_organisasi_is_constraint_violation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = CreateSppg::parse(&json!({
            "nama": "SPPG Yatim",
            "alamat": "Jl. Sepi",
            "kapasitasProduksi": 10,
            "organisasiId": Uuid::new_v4().to_string(),
        }))?;
        let err = create(&db, &operator(), input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        Ok(())
    }

    #[tokio::test]
    async fn map_listing_needs_both_coordinates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        seed_sppg(&db, org.id, "B Lengkap").await?;
        seed_sppg(&db, org.id, "A Lengkap").await?;
        let no_coords = CreateSppg::parse(&json!({
            "nama": "Tanpa Titik",
            "alamat": "Jl. X",
            "kapasitasProduksi": 1,
            "latitude": -6.2,
            "organisasiId": org.id.to_string(),
        }))?;
        create(&db, &operator(), no_coords).await?;

        let names: Vec<String> = list_for_map(&db).await?.into_iter().map(|r| r.sppg.nama).collect();
        assert_eq!(names, vec!["A Lengkap".to_string(), "B Lengkap".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_organisasi() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = seed_organisasi(&db, "A").await?;
        let b = seed_organisasi(&db, "B").await?;
        seed_sppg(&db, a.id, "A1").await?;
        seed_sppg(&db, a.id, "A2").await?;
        seed_sppg(&db, b.id, "B1").await?;

        assert_eq!(list(&db, None).await?.len(), 3);
        assert_eq!(list(&db, Some(a.id)).await?.len(), 2);
        let names: Vec<String> = list_by_organisasi(&db, a.id).await?.into_iter().map(|s| s.nama).collect();
        assert_eq!(names, vec!["A1".to_string(), "A2".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn stats_count_per_status() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let a = seed_sppg(&db, org.id, "A").await?;
        seed_sppg(&db, org.id, "B").await?;
        seed_sppg(&db, org.id, "C").await?;
        verify(&db, &operator(), a.id, VerifySppg::parse(&json!({ "statusVerifikasi": "APPROVED" }))?).await?;

        let s = stats(&db).await?;
        assert_eq!(s, SppgStats { total: 3, draft: 2, approved: 1, ..Default::default() });
        Ok(())
    }
}
