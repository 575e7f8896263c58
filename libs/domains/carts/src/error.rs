use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartError {
    /// Expected outcome: the caller maps this to its 404 equivalent
    #[error("Cart not found: {0}")]
    NotFound(Uuid),

    /// Backing-store failure: the caller maps this to its 5xx equivalent
    #[error("Database error: {0}")]
    Database(String),
}

pub type CartResult<T> = Result<T, CartError>;

impl From<mongodb::error::Error> for CartError {
    fn from(err: mongodb::error::Error) -> Self {
        CartError::Database(err.to_string())
    }
}
