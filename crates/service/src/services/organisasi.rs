use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use models::enums::StatusAktif;
use models::organisasi::{self, CreateOrganisasi, UpdateOrganisasi};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "organisasi";

/// Entry of the organization picker.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisasiOption {
    pub id: Uuid,
    pub nama: String,
    pub singkatan: Option<String>,
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<organisasi::Model>, ServiceError> {
    Ok(organisasi::Entity::find()
        .order_by_asc(organisasi::Column::Nama)
        .all(db)
        .await?)
}

/// Active organizations only, by name.
pub async fn list_options(db: &DatabaseConnection) -> Result<Vec<OrganisasiOption>, ServiceError> {
    let rows: Vec<(Uuid, String, Option<String>)> = organisasi::Entity::find()
        .select_only()
        .column(organisasi::Column::Id)
        .column(organisasi::Column::Nama)
        .column(organisasi::Column::Singkatan)
        .filter(organisasi::Column::Status.eq(StatusAktif::Aktif))
        .order_by_asc(organisasi::Column::Nama)
        .into_tuple()
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(id, nama, singkatan)| OrganisasiOption { id, nama, singkatan })
        .collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<organisasi::Model>, ServiceError> {
    Ok(organisasi::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateOrganisasi) -> Result<organisasi::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateOrganisasi,
) -> Result<organisasi::Model, ServiceError> {
    let current = find_existing::<organisasi::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<organisasi::Entity, _>(db, id, ENTITY).await
}
