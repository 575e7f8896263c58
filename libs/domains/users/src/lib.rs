//! Users Domain
//!
//! Lean user directory for the storefront: admin-panel listings, session
//! summaries, and last-connection bookkeeping over MongoDB. Authentication
//! itself lives elsewhere; this crate only serves already-authenticated
//! callers.

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{Role, User, UserSummary};
pub use mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
