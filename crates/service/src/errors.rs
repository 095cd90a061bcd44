use models::errors::ModelError;
use models::schema::ValidationErrors;
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Cause of a failed action, surfaced to callers next to the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    ConstraintViolation,
    Unavailable,
    Internal,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }

    pub fn invalid(field: &str, message: &str) -> Self {
        Self::Validation(ValidationErrors::single(field, message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Db(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(m)) | Some(SqlErr::ForeignKeyConstraintViolation(m)) => {
                return Self::ConstraintViolation(m);
            }
            _ => {}
        }
        match e {
            DbErr::RecordNotFound(m) => Self::NotFound(m),
            DbErr::RecordNotUpdated => Self::NotFound("record not updated".into()),
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(e.to_string()),
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::invalid("_root", &m),
            ModelError::Fields(v) => Self::Validation(v),
            ModelError::Db(db) => db.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_are_classified() {
        let e: ServiceError = DbErr::RecordNotFound("sppg".into()).into();
        assert_eq!(e.kind(), ErrorKind::NotFound);
        let e: ServiceError = DbErr::RecordNotUpdated.into();
        assert_eq!(e.kind(), ErrorKind::NotFound);
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert_eq!(e.kind(), ErrorKind::Internal);
    }

    #[test]
    fn kind_serializes_upper_snake() {
        let s = serde_json::to_string(&ErrorKind::ConstraintViolation).unwrap();
        assert_eq!(s, "\"CONSTRAINT_VIOLATION\"");
    }
}
