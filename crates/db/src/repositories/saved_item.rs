use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;

use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};

use super::{RepositoryError, SavedItemRepository};
use crate::DbPool;

pub struct SqlSavedItemRepository {
    pool: DbPool,
}

impl SqlSavedItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode_row(row: &sqlx::sqlite::SqliteRow) -> Result<SavedItem, RepositoryError> {
    let content_type: String = row.get("content_type");
    let content_type = ContentType::from_str(&content_type)
        .map_err(|error| RepositoryError::Decode(error.to_string()))?;

    let content_data: String = row.get("content_data");
    let content_data = serde_json::from_str(&content_data)
        .map_err(|error| RepositoryError::Decode(format!("content_data: {error}")))?;

    let created_at: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|error| RepositoryError::Decode(format!("created_at: {error}")))?
        .with_timezone(&Utc);

    Ok(SavedItem {
        id: SavedItemId(row.get("id")),
        user_id: row.get("user_id"),
        content_type,
        content_id: row.get("content_id"),
        content_data,
        created_at,
    })
}

#[async_trait::async_trait]
impl SavedItemRepository for SqlSavedItemRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedItem>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_id, content_type, content_id, content_data, created_at \
             FROM user_saves WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_row).collect()
    }

    async fn find(
        &self,
        user_id: &str,
        content_type: ContentType,
        content_id: &str,
    ) -> Result<Option<SavedItem>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, user_id, content_type, content_id, content_data, created_at \
             FROM user_saves WHERE user_id = ? AND content_type = ? AND content_id = ?",
        )
        .bind(user_id)
        .bind(content_type.as_str())
        .bind(content_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn save(&self, item: SavedItem) -> Result<(), RepositoryError> {
        let content_data = serde_json::to_string(&item.content_data)
            .map_err(|error| RepositoryError::Decode(format!("content_data: {error}")))?;

        sqlx::query(
            "INSERT INTO user_saves (id, user_id, content_type, content_id, content_data, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT (user_id, content_type, content_id) \
             DO UPDATE SET content_data = excluded.content_data",
        )
        .bind(&item.id.0)
        .bind(&item.user_id)
        .bind(item.content_type.as_str())
        .bind(&item.content_id)
        .bind(content_data)
        .bind(item.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &SavedItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM user_saves WHERE id = ? AND user_id = ?")
            .bind(&id.0)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
