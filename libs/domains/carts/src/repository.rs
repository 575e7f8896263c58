use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain_catalog::Product;

use crate::error::CartResult;
use crate::models::{Cart, PopulatedCart, PopulatedItem};

/// Repository trait for read-only cart access
///
/// `find_with_products` performs the populate step: each line item's
/// product reference is resolved against the product collection, and a
/// reference whose product no longer exists resolves to `None` rather than
/// failing the whole lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Get a cart by ID without resolving product references
    async fn get_by_id(&self, id: Uuid) -> CartResult<Option<Cart>>;

    /// Resolve a cart and eagerly join each line item's product record
    async fn find_with_products(&self, id: Uuid) -> CartResult<Option<PopulatedCart>>;
}

/// In-memory implementation of CartRepository (for development/testing)
///
/// Holds its own product map so the populate step can be exercised without
/// a running MongoDB.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self {
            carts: Arc::new(RwLock::new(HashMap::new())),
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store with carts (development/test setup)
    pub async fn seed_carts<I>(&self, carts: I)
    where
        I: IntoIterator<Item = Cart>,
    {
        let mut store = self.carts.write().await;
        for cart in carts {
            store.insert(cart.id, cart);
        }
    }

    /// Seed the store with products the carts may reference
    pub async fn seed_products<I>(&self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        let mut store = self.products.write().await;
        for product in products {
            store.insert(product.id, product);
        }
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_by_id(&self, id: Uuid) -> CartResult<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(&id).cloned())
    }

    async fn find_with_products(&self, id: Uuid) -> CartResult<Option<PopulatedCart>> {
        let carts = self.carts.read().await;
        let Some(cart) = carts.get(&id) else {
            return Ok(None);
        };

        let products = self.products.read().await;
        let items = cart
            .items
            .iter()
            .map(|item| PopulatedItem {
                product_id: item.product_id,
                quantity: item.quantity,
                product: products.get(&item.product_id).cloned(),
            })
            .collect();

        Ok(Some(PopulatedCart { id: cart.id, items }))
    }
}
