//! Catalog Domain
//!
//! Read-side catalog queries for the storefront: filtering, price sorting,
//! and pagination over the product collection in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Normalization, NotFound mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB/in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, filters, page envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     models::{PageRequest, ProductFilter},
//!     mongodb::MongoProductRepository,
//!     service::CatalogService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = CatalogService::new(repository);
//!
//! let filter = ProductFilter::from_query(Some("shirt"));
//! let request = PageRequest::from_params(Some("1"), Some("10"), Some("asc"));
//! let page = service.paginate(filter, request).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use models::{
    PageRequest, PriceSort, Product, ProductFilter, ProductPage, DEFAULT_LIMIT, DEFAULT_PAGE,
};
pub use mongodb::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::CatalogService;
