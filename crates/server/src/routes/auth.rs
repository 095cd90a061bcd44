use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use uuid::Uuid;

use service::auth::domain::{AuthUser, LoginInput, RegisterInput};
use service::auth::repo::SeaOrmAuthRepository;
use service::auth::AuthService;
use service::Actor;

use crate::errors::JsonApiError;
use crate::middlewares::SESSION_COOKIE;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub user: AuthUser,
    pub token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeOutput {
    pub user_id: Uuid,
    pub sppg_id: Option<Uuid>,
}

fn auth_service(state: &AppState) -> AuthService<SeaOrmAuthRepository> {
    AuthService::new(Arc::new(SeaOrmAuthRepository::new(state.db.clone())), state.auth_config())
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest,
    responses((status = 200, description = "Registered"), (status = 409, description = "Email taken"), (status = 422, description = "Invalid input")))]
pub async fn register(State(state): State<AppState>, Json(input): Json<RegisterInput>) -> Result<Json<AuthUser>, JsonApiError> {
    let user = auth_service(&state).register(input).await?;
    Ok(Json(user))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Session issued"), (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let session = auth_service(&state).login(input).await?;
    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    Ok((jar.add(cookie), Json(LoginOutput { user: session.user, token: session.token })))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.remove(Cookie::build(SESSION_COOKIE).path("/")), StatusCode::NO_CONTENT)
}

pub async fn me(Extension(actor): Extension<Actor>) -> Json<MeOutput> {
    Json(MeOutput { user_id: actor.user_id, sppg_id: actor.sppg_id })
}

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}
