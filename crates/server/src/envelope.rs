//! HTTP rendering of the action envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use service::{ActionResponse, ErrorKind};

pub fn status_for(kind: Option<ErrorKind>) -> StatusCode {
    match kind {
        None => StatusCode::OK,
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::ValidationFailed) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(ErrorKind::ConstraintViolation) => StatusCode::CONFLICT,
        Some(ErrorKind::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
        Some(ErrorKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// An [`ActionResponse`] as the body, its `kind` as the status.
pub struct Envelope<T>(pub ActionResponse<T>);

impl<T> From<ActionResponse<T>> for Envelope<T> {
    fn from(res: ActionResponse<T>) -> Self {
        Self(res)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = if self.0.success { StatusCode::OK } else { status_for(self.0.kind) };
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        assert_eq!(status_for(None), StatusCode::OK);
        assert_eq!(status_for(Some(ErrorKind::NotFound)), StatusCode::NOT_FOUND);
        assert_eq!(status_for(Some(ErrorKind::ValidationFailed)), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(Some(ErrorKind::ConstraintViolation)), StatusCode::CONFLICT);
        assert_eq!(status_for(Some(ErrorKind::Unavailable)), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(Some(ErrorKind::Internal)), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
