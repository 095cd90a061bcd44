use thiserror::Error;

use crate::schema::ValidationErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Fields(#[from] ValidationErrors),
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}
