//! MongoDB implementation of CartRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use std::collections::HashMap;
use tracing::instrument;
use uuid::Uuid;

use domain_catalog::Product;

use crate::error::CartResult;
use crate::models::{Cart, PopulatedCart, PopulatedItem};
use crate::repository::CartRepository;

/// MongoDB implementation of the CartRepository
///
/// The populate step is one cart lookup plus one `$in` batch fetch of the
/// referenced products; a reference whose product document is gone simply
/// has no match in the batch and resolves to `None`.
pub struct MongoCartRepository {
    carts: Collection<Cart>,
    products: Collection<Product>,
}

impl MongoCartRepository {
    /// Create a new MongoCartRepository over the default collection names
    pub fn new(db: &Database) -> Self {
        Self {
            carts: db.collection::<Cart>("carts"),
            products: db.collection::<Product>("products"),
        }
    }

    /// Create a MongoCartRepository with custom collection names
    pub fn with_collections(db: &Database, carts: &str, products: &str) -> Self {
        Self {
            carts: db.collection::<Cart>(carts),
            products: db.collection::<Product>(products),
        }
    }

    /// Get the underlying carts collection for advanced operations
    pub fn collection(&self) -> &Collection<Cart> {
        &self.carts
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CartResult<Option<Cart>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let cart = self.carts.find_one(filter).await?;
        Ok(cart)
    }

    #[instrument(skip(self))]
    async fn find_with_products(&self, id: Uuid) -> CartResult<Option<PopulatedCart>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let Some(cart) = self.carts.find_one(filter).await? else {
            return Ok(None);
        };

        let mut products_by_id: HashMap<Uuid, Product> = HashMap::new();
        if !cart.items.is_empty() {
            let ids: Vec<Bson> = cart
                .items
                .iter()
                .map(|item| to_bson(&item.product_id).unwrap_or(Bson::Null))
                .collect();

            let cursor = self
                .products
                .find(doc! { "_id": { "$in": ids } })
                .await?;
            let fetched: Vec<Product> = cursor.try_collect().await?;

            for product in fetched {
                products_by_id.insert(product.id, product);
            }
        }

        let items = cart
            .items
            .iter()
            .map(|item| PopulatedItem {
                product_id: item.product_id,
                quantity: item.quantity,
                product: products_by_id.get(&item.product_id).cloned(),
            })
            .collect();

        Ok(Some(PopulatedCart { id: cart.id, items }))
    }
}
