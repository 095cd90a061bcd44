//! Environment/runtime helpers
//!
//! Startup checks that only warn, so a half-configured deployment still boots.

use tracing::{debug, warn};

/// Load `.env` from the working directory when one exists.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), ".env loaded"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, ".env present but unreadable"),
    }
}

/// Warn when an optional key file is configured but missing.
pub async fn check_key_file(path: Option<&str>) -> anyhow::Result<()> {
    let Some(path) = path else { return Ok(()) };
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{path} is not a regular file")),
        Err(_) => {
            warn!(%path, "key file not found; falling back to the inline key");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_file_only_warns() {
        assert!(check_key_file(None).await.is_ok());
        assert!(check_key_file(Some("/nonexistent/mapkit.p8")).await.is_ok());
        assert!(check_key_file(Some(env!("CARGO_MANIFEST_DIR"))).await.is_err());
        assert!(check_key_file(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))).await.is_ok());
    }
}
