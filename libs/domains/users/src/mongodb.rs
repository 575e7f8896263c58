//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> UserResult<()> {
        let indexes = vec![
            // Unique email index
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_email_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("User indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "email": 1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }

    #[instrument(skip(self))]
    async fn touch_last_connection(&self, id: Uuid) -> UserResult<()> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let update = doc! {
            "$set": { "last_connection": chrono::Utc::now().to_rfc3339() }
        };

        let result = self.collection.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::debug!(user_id = %id, "Last connection updated");
        Ok(())
    }
}
