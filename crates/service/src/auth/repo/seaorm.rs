use sea_orm::{DatabaseConnection, EntityTrait, SqlErr};
use uuid::Uuid;

use models::errors::ModelError;
use models::pengguna;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

/// Accounts stored in the `pengguna` table.
#[derive(Clone)]
pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_user(m: pengguna::Model) -> AuthUser {
    AuthUser { id: m.id, email: m.email, nama: m.nama, sppg_id: m.sppg_id }
}

fn repo_err(e: ModelError) -> AuthError {
    match e {
        ModelError::Validation(m) => AuthError::Validation(m),
        ModelError::Db(db) => match db.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::Conflict,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AuthError::Validation("SPPG tidak ditemukan".into()),
            _ => AuthError::Repository(db.to_string()),
        },
        ModelError::Fields(v) => AuthError::Validation(v.to_string()),
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let found = pengguna::find_by_email(&self.db, email).await.map_err(repo_err)?;
        Ok(found.map(to_user))
    }

    async fn create_user(
        &self,
        email: &str,
        nama: &str,
        sppg_id: Option<Uuid>,
        (password_hash, password_algorithm): (String, String),
    ) -> Result<AuthUser, AuthError> {
        let created = pengguna::create(&self.db, email, nama, password_hash, &password_algorithm, sppg_id)
            .await
            .map_err(repo_err)?;
        Ok(to_user(created))
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let found = pengguna::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(found.map(|u| Credentials {
            user_id: u.id,
            password_hash: u.password_hash,
            password_algorithm: u.password_algorithm,
        }))
    }
}
