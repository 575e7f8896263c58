use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{PageRequest, PriceSort, Product, ProductFilter, ProductPage};

/// Repository trait for read-only product access
///
/// This trait defines the data access interface for the catalog.
/// Implementations can use different storage backends (MongoDB, in-memory).
///
/// `paginate` and `count` receive already-normalized requests; the filter
/// semantics (strict `stock > 0`, literal case-insensitive text matching on
/// title or category, ascending-id tie-break for price sorts) are part of
/// the contract and every implementation must honor them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch one page of products matching the filter, plus pagination
    /// metadata computed over the full match set
    async fn paginate(
        &self,
        filter: ProductFilter,
        request: PageRequest,
    ) -> CatalogResult<ProductPage>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Count products matching a filter, irrespective of pagination
    async fn count(&self, filter: ProductFilter) -> CatalogResult<u64>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Natural order here is deterministic, unlike MongoDB's: newest
/// `created_at` first with ascending id as tie-break.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store with products (development/test setup)
    pub async fn seed<I>(&self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        let mut store = self.products.write().await;
        for product in products {
            store.insert(product.id, product);
        }
    }
}

fn matches(filter: &ProductFilter, product: &Product) -> bool {
    match filter {
        ProductFilter::All => true,
        ProductFilter::InStock => product.stock > 0,
        ProductFilter::Text(pattern) => {
            let needle = pattern.to_lowercase();
            product.title.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn paginate(
        &self,
        filter: ProductFilter,
        request: PageRequest,
    ) -> CatalogResult<ProductPage> {
        let products = self.products.read().await;

        let mut matching: Vec<Product> = products
            .values()
            .filter(|p| matches(&filter, p))
            .cloned()
            .collect();

        match request.sort {
            PriceSort::Asc => {
                matching.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.id.cmp(&b.id)))
            }
            PriceSort::Desc => {
                matching.sort_by(|a, b| b.price.cmp(&a.price).then_with(|| a.id.cmp(&b.id)))
            }
            // This store's natural order: newest first, id tie-break
            PriceSort::Unsorted => matching
                .sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id))),
        }

        let total_items = matching.len() as u64;
        let items: Vec<Product> = matching
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit.max(1) as usize)
            .collect();

        Ok(ProductPage::assemble(items, total_items, &request))
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn count(&self, filter: ProductFilter) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| matches(&filter, p)).count() as u64)
    }
}
