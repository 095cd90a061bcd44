use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::sppg;

/// Dashboard account. The hash never leaves the service layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pengguna")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub nama: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub password_algorithm: String,
    pub sppg_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    email: &str,
    nama: &str,
    password_hash: String,
    algorithm: &str,
    sppg_id: Option<Uuid>,
) -> Result<Model, ModelError> {
    let email = normalize_email(email);
    if !email.contains('@') {
        return Err(ModelError::Validation("Email tidak valid".into()));
    }
    if nama.trim().is_empty() {
        return Err(ModelError::Validation("Nama harus diisi".into()));
    }
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        nama: Set(nama.trim().to_string()),
        password_hash: Set(password_hash),
        password_algorithm: Set(algorithm.to_string()),
        sppg_id: Set(sppg_id),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Email.eq(normalize_email(email)))
        .one(db)
        .await?)
}
