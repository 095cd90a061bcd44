use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Persistence needed by [`super::AuthService`]. Emails arrive normalized.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(
        &self,
        email: &str,
        nama: &str,
        sppg_id: Option<Uuid>,
        credentials: (String, String),
    ) -> Result<AuthUser, AuthError>;
    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError>;
}

/// In-memory repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, AuthUser>>,
        creds: Mutex<HashMap<Uuid, Credentials>>,
    }

    fn poisoned<T>(_: T) -> AuthError {
        AuthError::Repository("mock store poisoned".into())
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.users.lock().map_err(poisoned)?.get(email).cloned())
        }

        async fn create_user(
            &self,
            email: &str,
            nama: &str,
            sppg_id: Option<Uuid>,
            (password_hash, password_algorithm): (String, String),
        ) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().map_err(poisoned)?;
            if users.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser { id: Uuid::new_v4(), email: email.to_string(), nama: nama.to_string(), sppg_id };
            users.insert(email.to_string(), user.clone());
            self.creds
                .lock()
                .map_err(poisoned)?
                .insert(user.id, Credentials { user_id: user.id, password_hash, password_algorithm });
            Ok(user)
        }

        async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
            Ok(self.creds.lock().map_err(poisoned)?.get(&user_id).cloned())
        }
    }
}
