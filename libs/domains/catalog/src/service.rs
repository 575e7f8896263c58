//! Catalog Service - read-side business logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{PageRequest, Product, ProductFilter, ProductPage};
use crate::repository::ProductRepository;

/// Catalog service providing the storefront's read operations
///
/// The service normalizes untrusted pagination input before it reaches a
/// repository and maps absent products to typed NotFound errors. It holds
/// no state beyond the repository handle; every call is an independent
/// read against the store's current snapshot.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch one page of the catalog.
    ///
    /// Malformed pagination input is normalized to defaults, never an
    /// error; a page past the end returns an empty item list with accurate
    /// totals. Only a backing-store failure produces `Err`.
    #[instrument(skip(self))]
    pub async fn paginate(
        &self,
        filter: ProductFilter,
        request: PageRequest,
    ) -> CatalogResult<ProductPage> {
        self.repository.paginate(filter, request.normalized()).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Count products matching a filter
    #[instrument(skip(self))]
    pub async fn count(&self, filter: ProductFilter) -> CatalogResult<u64> {
        self.repository.count(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceSort;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn product(title: &str, price: i64) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: String::new(),
            category: "General".to_string(),
            price,
            stock: 1,
            code: None,
            thumbnails: vec![],
            metadata: serde_json::Value::Null,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_paginate_normalizes_request_before_repository() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_paginate()
            .withf(|_, request| request.page == 1 && request.limit == 10)
            .returning(|_, request| Ok(ProductPage::assemble(vec![], 0, &request)));

        let service = CatalogService::new(mock_repo);
        let degenerate = PageRequest {
            page: 0,
            limit: -7,
            sort: PriceSort::Unsorted,
        };

        let page = service
            .paginate(ProductFilter::All, degenerate)
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_paginate_passes_valid_request_through() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_paginate()
            .withf(|filter, request| {
                *filter == ProductFilter::InStock && request.page == 3 && request.limit == 5
            })
            .returning(|_, request| {
                Ok(ProductPage::assemble(vec![product("Mug", 899)], 11, &request))
            });

        let service = CatalogService::new(mock_repo);
        let request = PageRequest {
            page: 3,
            limit: 5,
            sort: PriceSort::Asc,
        };

        let page = service
            .paginate(ProductFilter::InStock, request)
            .await
            .unwrap();
        assert_eq!(page.total_items, 11);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        let lamp = product("Lamp", 2500);
        let id = lamp.id;

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(move |_| Ok(Some(lamp.clone())));

        let service = CatalogService::new(mock_repo);
        let found = service.get_product(id).await.unwrap();
        assert_eq!(found.title, "Lamp");
    }

    #[tokio::test]
    async fn test_get_product_missing_maps_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = CatalogService::new(mock_repo);
        let missing = Uuid::now_v7();

        match service.get_product(missing).await {
            Err(CatalogError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected NotFound, got {:?}", other.map(|p| p.title)),
        }
    }

    #[tokio::test]
    async fn test_backing_store_failure_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_paginate()
            .returning(|_, _| Err(CatalogError::Database("connection reset".to_string())));

        let service = CatalogService::new(mock_repo);
        let result = service
            .paginate(ProductFilter::All, PageRequest::default())
            .await;

        assert!(matches!(result, Err(CatalogError::Database(_))));
    }
}
