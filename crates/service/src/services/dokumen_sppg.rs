use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::dokumen_sppg::{self, CreateDokumenSppg, ReviewDokumen, UpdateDokumenSppg};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "dokumen_sppg";

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> Result<Vec<dokumen_sppg::Model>, ServiceError> {
    let mut q = dokumen_sppg::Entity::find();
    if let Some(sppg) = sppg_id {
        q = q.filter(dokumen_sppg::Column::SppgId.eq(sppg));
    }
    Ok(q.order_by_desc(dokumen_sppg::Column::TanggalTerbit)
        .order_by_desc(dokumen_sppg::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<dokumen_sppg::Model>, ServiceError> {
    Ok(dokumen_sppg::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateDokumenSppg) -> Result<dokumen_sppg::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateDokumenSppg,
) -> Result<dokumen_sppg::Model, ServiceError> {
    let current = find_existing::<dokumen_sppg::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, verdict = ?input.status_dokumen))]
pub async fn review(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: ReviewDokumen) -> Result<dokumen_sppg::Model, ServiceError> {
    let current = find_existing::<dokumen_sppg::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<dokumen_sppg::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_organisasi, seed_sppg};
    use models::enums::StatusDokumen;
    use serde_json::json;

    #[tokio::test]
    async fn upload_then_review() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let reviewer = operator();
        let input = CreateDokumenSppg::parse(&json!({
            "jenisDokumen": "SLHS",
            "namaDokumen": "Sertifikat Laik Higiene",
            "tanggalTerbit": "2024-01-10",
            "tanggalExpiry": "2027-01-10",
            "filePath": "/uploads/slhs.pdf",
            "sppgId": unit.id.to_string(),
        }))?;

        let doc = create(&db, &operator(), input).await?;
        assert_eq!(doc.status_dokumen, StatusDokumen::Pending);

        let verdict = ReviewDokumen::parse(&json!({ "statusDokumen": "REJECTED", "catatanReview": "Scan buram" }))?;
        let reviewed = review(&db, &reviewer, doc.id, verdict).await?;
        assert_eq!(reviewed.status_dokumen, StatusDokumen::Rejected);
        assert_eq!(reviewed.catatan_review.as_deref(), Some("Scan buram"));
        assert_eq!(reviewed.updated_by, Some(reviewer.user_id));
        assert_eq!(reviewed.file_path, "/uploads/slhs.pdf");

        assert_eq!(list(&db, Some(unit.id)).await?.len(), 1);
        delete(&db, doc.id).await?;
        assert!(list(&db, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let actor = operator();
        let input = CreateDokumenSppg::parse(&json!({
            "jenisDokumen": "SLHS",
            "namaDokumen": "Sertifikat Laik Higiene",
            "nomorDokumen": "SLHS/2024/001",
            "tanggalTerbit": "2024-01-10",
            "tanggalExpiry": "2027-01-10",
            "filePath": "/uploads/slhs.pdf",
            "sppgId": unit.id.to_string(),
        }))?;
        let created = create(&db, &actor, input).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdateDokumenSppg::parse(&json!({ "filePath": "/uploads/slhs-v2.pdf" }))?).await?;
        assert_eq!(updated.file_path, "/uploads/slhs-v2.pdf");
        assert_eq!(updated.nama_dokumen, created.nama_dokumen);
        assert_eq!(updated.nomor_dokumen.as_deref(), Some("SLHS/2024/001"));
        assert_eq!((updated.tanggal_terbit, updated.tanggal_expiry), (created.tanggal_terbit, created.tanggal_expiry));
        assert_eq!(updated.jenis_dokumen, created.jenis_dokumen);
        assert_eq!(updated.status_dokumen, StatusDokumen::Pending);
        assert_eq!(updated.sppg_id, unit.id);

        delete(&db, created.id).await?;
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
