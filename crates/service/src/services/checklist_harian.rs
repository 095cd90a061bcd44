use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::instrument;
use uuid::Uuid;

use models::checklist_harian::{self, CreateChecklistHarian, ReviewChecklist, UpdateChecklistHarian};
use models::enums::StatusChecklist;

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "checklist_harian";

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> Result<Vec<checklist_harian::Model>, ServiceError> {
    let mut q = checklist_harian::Entity::find();
    if let Some(sppg) = sppg_id {
        q = q.filter(checklist_harian::Column::SppgId.eq(sppg));
    }
    Ok(q.order_by_desc(checklist_harian::Column::Tanggal)
        .order_by_desc(checklist_harian::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<checklist_harian::Model>, ServiceError> {
    Ok(checklist_harian::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateChecklistHarian,
) -> Result<checklist_harian::Model, ServiceError> {
    let sppg_id = actor.resolve_sppg(input.sppg_id)?;
    Ok(input.into_active_model(sppg_id, actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateChecklistHarian,
) -> Result<checklist_harian::Model, ServiceError> {
    let current = find_existing::<checklist_harian::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

/// Hand the checklist over for review.
pub async fn submit(db: &DatabaseConnection, actor: &Actor, id: Uuid) -> Result<checklist_harian::Model, ServiceError> {
    let current = find_existing::<checklist_harian::Entity, _>(db, id, ENTITY).await?;
    let mut am: checklist_harian::ActiveModel = current.into();
    am.status = Set(StatusChecklist::Submitted);
    am.updated_by = Set(Some(actor.user_id));
    am.updated_at = Set(Some(Utc::now().into()));
    Ok(am.update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, skor = input.skor_kepatuhan))]
pub async fn review(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: ReviewChecklist,
) -> Result<checklist_harian::Model, ServiceError> {
    let current = find_existing::<checklist_harian::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<checklist_harian::Entity, _>(db, id, ENTITY).await
}
