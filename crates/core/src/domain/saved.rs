use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedItemId(pub String);

/// Kind of content a user can bookmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Place,
    Product,
    Youtube,
    Web,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Product => "product",
            Self::Youtube => "youtube",
            Self::Web => "web",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "place" => Ok(Self::Place),
            "product" => Ok(Self::Product),
            "youtube" => Ok(Self::Youtube),
            "web" => Ok(Self::Web),
            other => Err(DomainError::UnknownContentType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookmarked search result or place, owned by a single user.
///
/// `content_data` holds the provider metadata the UI needs to re-render the
/// card (title, image, link) without re-querying the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: SavedItemId,
    pub user_id: String,
    pub content_type: ContentType,
    pub content_id: String,
    pub content_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
