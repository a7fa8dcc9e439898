use std::collections::HashMap;

use tokio::sync::RwLock;

use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};

use super::{RepositoryError, SavedItemRepository};

/// Test double mirroring `SqlSavedItemRepository` semantics, including the
/// (user, content_type, content_id) upsert key.
#[derive(Default)]
pub struct InMemorySavedItemRepository {
    items: RwLock<HashMap<String, SavedItem>>,
}

fn upsert_key(user_id: &str, content_type: ContentType, content_id: &str) -> String {
    format!("{user_id}\u{1f}{content_type}\u{1f}{content_id}")
}

#[async_trait::async_trait]
impl SavedItemRepository for InMemorySavedItemRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedItem>, RepositoryError> {
        let items = self.items.read().await;
        let mut matched: Vec<SavedItem> =
            items.values().filter(|item| item.user_id == user_id).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(matched)
    }

    async fn find(
        &self,
        user_id: &str,
        content_type: ContentType,
        content_id: &str,
    ) -> Result<Option<SavedItem>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.get(&upsert_key(user_id, content_type, content_id)).cloned())
    }

    async fn save(&self, item: SavedItem) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let key = upsert_key(&item.user_id, item.content_type, &item.content_id);
        if let Some(existing) = items.get_mut(&key) {
            existing.content_data = item.content_data;
        } else {
            items.insert(key, item);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &SavedItemId) -> Result<bool, RepositoryError> {
        let mut items = self.items.write().await;
        let key = items
            .iter()
            .find(|(_, item)| item.id == *id && item.user_id == user_id)
            .map(|(key, _)| key.clone());
        Ok(match key {
            Some(key) => items.remove(&key).is_some(),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};

    use super::InMemorySavedItemRepository;
    use crate::repositories::SavedItemRepository;

    fn item(id: &str, user_id: &str, content_id: &str) -> SavedItem {
        SavedItem {
            id: SavedItemId(id.to_string()),
            user_id: user_id.to_string(),
            content_type: ContentType::Youtube,
            content_id: content_id.to_string(),
            content_data: json!({"title": "강아지 훈련 브이로그"}),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn in_memory_repo_round_trip() {
        let repo = InMemorySavedItemRepository::default();
        let saved = item("s-1", "user-a", "video-1");

        repo.save(saved.clone()).await.expect("save");
        let found =
            repo.find("user-a", ContentType::Youtube, "video-1").await.expect("find");
        assert_eq!(found, Some(saved.clone()));

        assert!(repo.delete("user-a", &saved.id).await.expect("delete"));
        assert!(repo.list_for_user("user-a").await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn upsert_semantics_match_sql_repository() {
        let repo = InMemorySavedItemRepository::default();
        repo.save(item("s-1", "user-a", "video-1")).await.expect("first");

        let mut updated = item("s-2", "user-a", "video-1");
        updated.content_data = json!({"title": "updated"});
        repo.save(updated).await.expect("second");

        let listed = repo.list_for_user("user-a").await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content_data["title"], "updated");
    }
}
