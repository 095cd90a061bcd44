use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use models::pengguna::normalize_email;

use super::domain::{AuthSession, AuthUser, LoginInput, RegisterInput, SessionClaims};
use super::errors::AuthError;
use super::repository::AuthRepository;
use crate::actor::Actor;

pub const PASSWORD_ALGORITHM: &str = "argon2";
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_hours: i64,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { jwt_secret: c.jwt_secret.clone(), session_hours: c.session_hours }
    }
}

/// Registration and login, independent of the web framework.
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Register a new dashboard account.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(
    ///     Arc::new(MockAuthRepository::default()),
    ///     AuthConfig { jwt_secret: "0123456789abcdef".into(), session_hours: 12 },
    /// );
    /// let input = RegisterInput { email: "Ahli@Gizi.id".into(), nama: "Ahli".into(), password: "rahasia123".into(), sppg_id: None };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "ahli@gizi.id");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        let email = normalize_email(&input.email);
        if !email.contains('@') {
            return Err(AuthError::Validation("Email tidak valid".into()));
        }
        if input.nama.trim().is_empty() {
            return Err(AuthError::Validation("Nama harus diisi".into()));
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation("Password minimal 8 karakter".into()));
        }
        if let Some(existing) = self.repo.find_user_by_email(&email).await? {
            debug!(user_id = %existing.id, "email already registered");
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let user = self
            .repo
            .create_user(&email, input.nama.trim(), input.sppg_id, (hash, PASSWORD_ALGORITHM.to_string()))
            .await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Verify the password and issue a session token.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let email = normalize_email(&input.email);
        let user = self
            .repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::Unauthorized)?;
        let cred = self
            .repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    pub fn issue_token(&self, user: &AuthUser) -> Result<String, AuthError> {
        let exp = (Utc::now() + Duration::hours(self.cfg.session_hours)).timestamp() as usize;
        let claims = SessionClaims { sub: user.email.clone(), uid: user.id, sid: user.sppg_id, exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

/// Decode a session token into the caller it identifies.
pub fn actor_from_token(secret: &str, token: &str) -> Result<Actor, AuthError> {
    let data = decode::<SessionClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
    let claims = data.claims;
    Ok(Actor { user_id: claims.uid, sppg_id: claims.sid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::SeaOrmAuthRepository;
    use crate::auth::repository::mock::MockAuthRepository;
    use crate::test_support::{get_db, seed_organisasi, seed_sppg};

    const SECRET: &str = "test-secret-0123456789";

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: SECRET.into(), session_hours: 12 },
        )
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput { email: email.into(), nama: "Petugas".into(), password: password.into(), sppg_id: None }
    }

    #[tokio::test]
    async fn register_validates_input() {
        let s = svc();
        for (email, nama, password) in [("tanpa-at", "A", "rahasia123"), ("a@b.id", "  ", "rahasia123"), ("a@b.id", "A", "pendek")] {
            let input = RegisterInput { email: email.into(), nama: nama.into(), password: password.into(), sppg_id: None };
            let err = s.register(input).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "{email} {nama} {password}");
        }
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let s = svc();
        s.register(register_input("ops@sppg.id", "rahasia123")).await.unwrap();
        let err = s.register(register_input("OPS@sppg.id ", "rahasia123")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(err.code(), 1002);
    }

    #[tokio::test]
    async fn login_issues_token_that_decodes_to_actor() {
        let s = svc();
        let sppg = uuid::Uuid::new_v4();
        let mut input = register_input("ops@sppg.id", "rahasia123");
        input.sppg_id = Some(sppg);
        let user = s.register(input).await.unwrap();

        let bad = s
            .login(LoginInput { email: "ops@sppg.id".into(), password: "salah-password".into() })
            .await
            .unwrap_err();
        assert!(matches!(bad, AuthError::Unauthorized));

        let session = s
            .login(LoginInput { email: "Ops@Sppg.id".into(), password: "rahasia123".into() })
            .await
            .unwrap();
        let actor = actor_from_token(SECRET, &session.token).unwrap();
        assert_eq!(actor.user_id, user.id);
        assert_eq!(actor.sppg_id, Some(sppg));

        assert!(actor_from_token("another-secret-xyz", &session.token).is_err());
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let s = AuthService::new(
            Arc::new(SeaOrmAuthRepository::new(db.clone())),
            AuthConfig { jwt_secret: SECRET.into(), session_hours: 1 },
        );

        let mut input = register_input("kepala@sppg.id", "rahasia123");
        input.sppg_id = Some(unit.id);
        let user = s.register(input).await?;
        assert!(matches!(
            s.register(register_input("kepala@sppg.id", "rahasia123")).await,
            Err(AuthError::Conflict)
        ));

        let session = s
            .login(LoginInput { email: "kepala@sppg.id".into(), password: "rahasia123".into() })
            .await?;
        assert_eq!(session.user, user);
        assert_eq!(actor_from_token(SECRET, &session.token)?.sppg_id, Some(unit.id));
        Ok(())
    }
}
