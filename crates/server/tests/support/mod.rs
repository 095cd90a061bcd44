#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tower::ServiceExt;

use configs::AppConfig;
use server::{build_router, AppState};

pub const JWT_SECRET: &str = "router-test-secret-0123456789";
pub const CRON_SECRET: &str = "cron-test-secret";

pub fn config(cron_secret: Option<&str>) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.auth.jwt_secret = JWT_SECRET.into();
    cfg.auth.session_hours = 12;
    cfg.cron.secret = cron_secret.map(str::to_string);
    cfg
}

pub async fn app_with(cfg: AppConfig) -> anyhow::Result<Router> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(build_router(AppState::new(db, &cfg), tower_http::cors::CorsLayer::very_permissive()))
}

pub async fn app() -> anyhow::Result<Router> {
    app_with(config(Some(CRON_SECRET))).await
}

pub async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req.header(header::CONTENT_TYPE, "application/json").body(Body::from(serde_json::to_vec(&b)?))?,
        None => req.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = resp.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, value))
}

/// Register and log in a fresh account; returns its bearer token.
pub async fn session(app: &Router, email: &str) -> anyhow::Result<String> {
    let (status, _) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": email, "nama": "Petugas", "password": "rahasia123" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "rahasia123" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body["token"].as_str().unwrap_or_default().to_string())
}
