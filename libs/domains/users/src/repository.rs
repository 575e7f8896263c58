use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List all users (deterministic email order)
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Stamp the user's last connection with the current time
    async fn touch_last_connection(&self, id: Uuid) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store with users (development/test setup)
    pub async fn seed<I>(&self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        let mut store = self.users.write().await;
        for user in users {
            store.insert(user.id, user);
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned();
        Ok(user)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(result)
    }

    async fn touch_last_connection(&self, id: Uuid) -> UserResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.last_connection = Utc::now();
        Ok(())
    }
}
