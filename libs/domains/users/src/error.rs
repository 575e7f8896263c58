use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    /// Expected outcome: the caller maps this to its 404 equivalent
    #[error("User not found: {0}")]
    NotFound(Uuid),

    /// Backing-store failure: the caller maps this to its 5xx equivalent
    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}
