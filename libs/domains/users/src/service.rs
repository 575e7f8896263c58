//! User Service - directory and session bookkeeping logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::UserSummary;
use crate::repository::UserRepository;

/// User service providing the storefront's user directory operations
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every user as a lean summary (the admin panel listing)
    #[instrument(skip(self))]
    pub async fn list_summaries(&self) -> UserResult<Vec<UserSummary>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    /// Get the lean summary for one user (the session view)
    #[instrument(skip(self))]
    pub async fn current(&self, id: Uuid) -> UserResult<UserSummary> {
        self.repository
            .get_by_id(id)
            .await?
            .map(UserSummary::from)
            .ok_or(UserError::NotFound(id))
    }

    /// Record that the user just made an authenticated request
    #[instrument(skip(self))]
    pub async fn record_connection(&self, id: Uuid) -> UserResult<()> {
        self.repository.touch_last_connection(id).await
    }
}
