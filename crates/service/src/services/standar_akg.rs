use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::enums::StatusAktif;
use models::standar_akg::{self, AkgEvaluation, CreateStandarAkg, UpdateStandarAkg, ValidateAkg};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "standar_akg";

pub async fn list(db: &DatabaseConnection, active_only: bool) -> Result<Vec<standar_akg::Model>, ServiceError> {
    let mut q = standar_akg::Entity::find();
    if active_only {
        q = q.filter(standar_akg::Column::StatusAktif.eq(StatusAktif::Aktif));
    }
    Ok(q.order_by_asc(standar_akg::Column::KelompokUsia).all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<standar_akg::Model>, ServiceError> {
    Ok(standar_akg::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateStandarAkg) -> Result<standar_akg::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateStandarAkg,
) -> Result<standar_akg::Model, ServiceError> {
    let current = find_existing::<standar_akg::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<standar_akg::Entity, _>(db, id, ENTITY).await
}

/// Grade a portion against the active standard of its age group.
#[instrument(skip(db, input), fields(kelompok = %input.kelompok_usia))]
pub async fn validate(db: &DatabaseConnection, input: ValidateAkg) -> Result<AkgEvaluation, ServiceError> {
    let standar = standar_akg::Entity::find()
        .filter(standar_akg::Column::KelompokUsia.eq(input.kelompok_usia.trim()))
        .filter(standar_akg::Column::StatusAktif.eq(StatusAktif::Aktif))
        .order_by_desc(standar_akg::Column::CreatedAt)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))?;
    Ok(standar.evaluate(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator};
    use models::enums::StatusAkg;
    use serde_json::json;

    fn balita() -> serde_json::Value {
        json!({
            "kelompokUsia": "Balita 1-3 tahun",
            "minKalori": 1125,
            "maxKalori": 1350,
            "minProtein": 26,
            "minKarbohidrat": 155,
            "minLemak": 44,
        })
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let actor = operator();
        let created = create(&db, &actor, CreateStandarAkg::parse(&balita())?).await?;
        assert_eq!(created.status_aktif, StatusAktif::Aktif);
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdateStandarAkg::parse(&json!({ "minProtein": 28 }))?).await?;
        assert_eq!(updated.min_protein, 28.0);
        assert_eq!(updated.kelompok_usia, created.kelompok_usia);
        assert_eq!(updated.min_kalori, created.min_kalori);
        assert_eq!(updated.max_kalori, created.max_kalori);
        assert_eq!(updated.status_aktif, StatusAktif::Aktif);
        assert_eq!(updated.created_by, created.created_by);
        assert_eq!(updated.updated_by, Some(actor.user_id));

        delete(&db, created.id).await?;
        assert!(get_by_id(&db, created.id).await?.is_none());
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn validate_uses_active_standard() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let actor = operator();
        let created = create(&db, &actor, CreateStandarAkg::parse(&balita())?).await?;
        let portion = json!({
            "kelompokUsia": "Balita 1-3 tahun",
            "kalori": 1200,
            "protein": 30,
            "karbohidrat": 160,
            "lemak": 45,
        });

        let graded = validate(&db, ValidateAkg::parse(&portion)?).await?;
        assert_eq!(graded.status_akg, StatusAkg::Memenuhi);
        assert_eq!(graded.standar.id, created.id);

        update(&db, &actor, created.id, UpdateStandarAkg::parse(&json!({ "statusAktif": "NON_AKTIF" }))?).await?;
        assert!(list(&db, true).await?.is_empty());
        assert_eq!(list(&db, false).await?.len(), 1);
        let err = validate(&db, ValidateAkg::parse(&portion)?).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        Ok(())
    }
}
