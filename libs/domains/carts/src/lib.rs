//! Carts Domain
//!
//! Cart resolution and valuation for the storefront: fetch a cart from
//! MongoDB, join each line item's product record, and compute the exact
//! total in cents.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← NotFound mapping, valuation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access + populate (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Cart, line items, priced views
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_carts::{mongodb::MongoCartRepository, service::CartService};
//! use mongodb::Client;
//! use uuid::Uuid;
//!
//! # async fn example(cart_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! let repository = MongoCartRepository::new(&db);
//! let service = CartService::new(repository);
//!
//! let priced = service.cart_with_total(cart_id).await?;
//! println!("cart total: {} cents", priced.total);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CartError, CartResult};
pub use models::{Cart, LineItem, PopulatedCart, PopulatedItem, PricedCart, PricedItem};
pub use mongodb::MongoCartRepository;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use service::CartService;
