use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Expected outcome: the caller maps this to its 404 equivalent
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    /// Backing-store failure: the caller maps this to its 5xx equivalent
    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}
