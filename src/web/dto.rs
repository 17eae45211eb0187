//! Response DTOs for the Skillshelf Web API.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::content::ContentItem;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response payload.
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Content item metadata in responses.
#[derive(Debug, Serialize)]
pub struct ContentItemResponse {
    /// Item ID.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category name.
    pub category: String,
    /// Language code.
    pub language: String,
    /// Provider name.
    pub provider: String,
    /// Target role.
    pub role: String,
    /// Original filename, if a file is attached.
    pub file_name: Option<String>,
    /// Declared media type, if a file is attached.
    pub file_type: Option<String>,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
}

/// Render a stored UTC timestamp as RFC 3339.
fn to_rfc3339(dt: &NaiveDateTime) -> String {
    dt.and_utc().to_rfc3339()
}

impl From<ContentItem> for ContentItemResponse {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            language: item.language,
            provider: item.provider,
            role: item.role,
            file_name: item.file_name,
            file_type: item.file_type,
            created_at: to_rfc3339(&item.created_at),
        }
    }
}
