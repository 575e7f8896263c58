//! Cart Service - valuation logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::models::{Cart, PricedCart};
use crate::repository::CartRepository;

/// Cart service providing the storefront's cart read operations
///
/// Stateless beyond the repository handle; every call is an independent
/// read against the store's current snapshot.
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

impl<R: CartRepository> CartService<R> {
    /// Create a new CartService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a cart by ID, without resolving product references
    #[instrument(skip(self))]
    pub async fn get_cart(&self, id: Uuid) -> CartResult<Cart> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CartError::NotFound(id))
    }

    /// Resolve a cart, join its products, and compute the exact total.
    ///
    /// Line items whose referenced product no longer exists are excluded
    /// from the total and listed in `PricedCart::missing_products`. An
    /// unknown cart id is `CartError::NotFound`; a backing-store failure
    /// aborts the whole operation.
    #[instrument(skip(self))]
    pub async fn cart_with_total(&self, id: Uuid) -> CartResult<PricedCart> {
        let populated = self
            .repository
            .find_with_products(id)
            .await?
            .ok_or(CartError::NotFound(id))?;

        Ok(populated.into_priced())
    }
}
