use async_trait::async_trait;
use thiserror::Error;

use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};

pub mod memory;
pub mod saved_item;

pub use memory::InMemorySavedItemRepository;
pub use saved_item::SqlSavedItemRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Owner-scoped persistence for bookmarked content. Every operation carries
/// the requesting user's id; a row belonging to someone else behaves as if it
/// did not exist.
#[async_trait]
pub trait SavedItemRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedItem>, RepositoryError>;

    async fn find(
        &self,
        user_id: &str,
        content_type: ContentType,
        content_id: &str,
    ) -> Result<Option<SavedItem>, RepositoryError>;

    /// Upsert keyed on (user, content_type, content_id); saving the same
    /// content twice refreshes its metadata instead of duplicating the row.
    async fn save(&self, item: SavedItem) -> Result<(), RepositoryError>;

    /// Returns whether a row owned by `user_id` was actually removed.
    async fn delete(&self, user_id: &str, id: &SavedItemId) -> Result<bool, RepositoryError>;
}
