//! MapKit JS authorization tokens.
//!
//! Tokens are ES256 JWTs signed with the team's PKCS#8 key and carry the
//! `kid` of that key in their header. A pre-issued token from
//! configuration is handed out as long as it has not expired.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use configs::MapKitConfig;

// Placeholder shipped in sample env files.
const PLACEHOLDER_TOKEN: &str = "your_jwt_token_here";

#[derive(Debug, Error)]
pub enum MapKitError {
    #[error("MAPKIT_TEAM_ID and MAPKIT_KEY_ID are required")]
    MissingIdentity,
    #[error("MAPKIT_PRIVATE_KEY_PATH or MAPKIT_PRIVATE_KEY is required")]
    MissingKey,
    #[error("failed to read private key {path}: {source}")]
    ReadKey {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid private key: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MapKitClaims {
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub origin: String,
}

#[derive(Deserialize)]
struct ExpiryOnly {
    exp: Option<i64>,
}

/// Token to hand to the browser: the configured one when still valid,
/// a freshly signed one otherwise.
pub async fn token(cfg: &MapKitConfig, now: DateTime<Utc>) -> Result<String, MapKitError> {
    if let Some(existing) = cfg.token.as_deref() {
        if reusable(existing, now) {
            debug!("reusing configured mapkit token");
            return Ok(existing.to_string());
        }
    }
    generate(cfg, now).await
}

pub async fn generate(cfg: &MapKitConfig, now: DateTime<Utc>) -> Result<String, MapKitError> {
    let (Some(team_id), Some(key_id)) = (cfg.team_id.as_deref(), cfg.key_id.as_deref()) else {
        return Err(MapKitError::MissingIdentity);
    };
    let pem = private_key(cfg).await?;
    let key = EncodingKey::from_ec_pem(pem.as_bytes()).map_err(MapKitError::InvalidKey)?;

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(key_id.to_string());

    let iat = now.timestamp();
    let claims = MapKitClaims {
        iss: team_id.to_string(),
        iat,
        exp: (now + Duration::days(cfg.ttl_days)).timestamp(),
        origin: cfg.origin.clone(),
    };
    encode(&header, &claims, &key).map_err(MapKitError::Sign)
}

async fn private_key(cfg: &MapKitConfig) -> Result<String, MapKitError> {
    if let Some(path) = cfg.private_key_path.as_deref() {
        match tokio::fs::read_to_string(path).await {
            Ok(pem) => return Ok(pem),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path, "mapkit key file not found, falling back to inline key");
            }
            Err(source) => {
                return Err(MapKitError::ReadKey {
                    path: path.to_string(),
                    source,
                })
            }
        }
    }
    cfg.private_key.clone().ok_or(MapKitError::MissingKey)
}

/// Only the expiry is checked; the browser-facing token is not ours to verify.
fn reusable(token: &str, now: DateTime<Utc>) -> bool {
    if token.is_empty() || token == PLACEHOLDER_TOKEN {
        return false;
    }
    let mut validation = Validation::new(Algorithm::ES256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    match decode::<ExpiryOnly>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data.claims.exp.is_some_and(|exp| exp > now.timestamp()),
        Err(e) => {
            warn!(error = %e, "configured mapkit token is invalid, generating a new one");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = include_str!("../tests/fixtures/mapkit_test_key.p8");
    const PUBLIC_KEY: &str = include_str!("../tests/fixtures/mapkit_test_key.pub.pem");

    fn cfg() -> MapKitConfig {
        MapKitConfig {
            team_id: Some("TEAM123456".into()),
            key_id: Some("KEY7890".into()),
            private_key: Some(KEY.into()),
            ..MapKitConfig::default()
        }
    }

    fn verify(token: &str) -> (Header, MapKitClaims) {
        let mut validation = Validation::new(Algorithm::ES256);
        validation.validate_exp = false;
        let key = DecodingKey::from_ec_pem(PUBLIC_KEY.as_bytes()).unwrap();
        let data = decode::<MapKitClaims>(token, &key, &validation).unwrap();
        (data.header, data.claims)
    }

    #[tokio::test]
    async fn signs_es256_token_with_kid() {
        let now = Utc::now();
        let token = generate(&cfg(), now).await.unwrap();
        let (header, claims) = verify(&token);
        assert_eq!(header.alg, Algorithm::ES256);
        assert_eq!(header.kid.as_deref(), Some("KEY7890"));
        assert_eq!(claims.iss, "TEAM123456");
        assert_eq!(claims.origin, "http://localhost:3000");
        assert_eq!(claims.exp - claims.iat, 30 * 86_400);
    }

    #[tokio::test]
    async fn key_file_wins_over_inline_key() {
        let mut c = cfg();
        c.private_key = Some("not a key".into());
        c.private_key_path = Some(format!("{}/tests/fixtures/mapkit_test_key.p8", env!("CARGO_MANIFEST_DIR")));
        let token = generate(&c, Utc::now()).await.unwrap();
        verify(&token);
    }

    #[tokio::test]
    async fn missing_settings_are_reported() {
        let mut c = cfg();
        c.team_id = None;
        assert!(matches!(generate(&c, Utc::now()).await, Err(MapKitError::MissingIdentity)));

        let mut c = cfg();
        c.private_key = None;
        assert!(matches!(generate(&c, Utc::now()).await, Err(MapKitError::MissingKey)));

        let mut c = cfg();
        c.private_key = Some("garbage".into());
        assert!(matches!(generate(&c, Utc::now()).await, Err(MapKitError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn configured_token_reused_until_expiry() {
        let issued_at = Utc::now() - Duration::days(10);
        let existing = generate(&cfg(), issued_at).await.unwrap();
        let mut c = cfg();
        c.token = Some(existing.clone());

        assert_eq!(token(&c, Utc::now()).await.unwrap(), existing);

        let later = issued_at + Duration::days(31);
        let fresh = token(&c, later).await.unwrap();
        assert_ne!(fresh, existing);
        assert_eq!(verify(&fresh).1.iat, later.timestamp());
    }

    #[tokio::test]
    async fn placeholder_and_garbage_tokens_are_ignored() {
        let mut c = cfg();
        c.token = Some(PLACEHOLDER_TOKEN.into());
        assert_ne!(token(&c, Utc::now()).await.unwrap(), PLACEHOLDER_TOKEN);
        c.token = Some("abc.def".into());
        assert_ne!(token(&c, Utc::now()).await.unwrap(), "abc.def");
    }

    #[tokio::test]
    async fn missing_key_file_falls_back_to_inline_key() {
        let mut c = cfg();
        c.private_key_path = Some(format!("{}/tests/fixtures/absent.p8", env!("CARGO_MANIFEST_DIR")));
        verify(&generate(&c, Utc::now()).await.unwrap());

        c.private_key = None;
        assert!(matches!(generate(&c, Utc::now()).await, Err(MapKitError::MissingKey)));
    }

    #[tokio::test]
    async fn unreadable_key_path_is_reported() {
        let mut c = cfg();
        c.private_key_path = Some(format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR")));
        assert!(matches!(generate(&c, Utc::now()).await, Err(MapKitError::ReadKey { .. })));
    }
}
