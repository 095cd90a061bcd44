//! Public map endpoints: unit locations and the MapKit JS token.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use service::actions::sppg as action;
use service::mapkit;
use service::peta::SppgLokasi;

use crate::envelope::Envelope;
use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TokenOutput {
    pub token: String,
}

#[utoipa::path(get, path = "/api/sppg/peta", tag = "peta", responses((status = 200, description = "Units with coordinates")))]
pub async fn lokasi(State(s): State<AppState>) -> Envelope<Vec<SppgLokasi>> {
    action::peta(&s.db).await.into()
}

#[utoipa::path(get, path = "/api/mapkit/token", tag = "peta",
    responses((status = 200, description = "MapKit JS token"), (status = 500, description = "Signing key missing or invalid")))]
pub async fn token(State(s): State<AppState>) -> Result<Json<TokenOutput>, JsonApiError> {
    let token = mapkit::token(&s.mapkit, Utc::now()).await?;
    Ok(Json(TokenOutput { token }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/sppg/peta", get(lokasi))
        .route("/api/mapkit/token", get(token))
}
