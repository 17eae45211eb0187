//! Content repository for Skillshelf.
//!
//! The sole place SQL is issued for content items. All values are passed as
//! bound parameters. Bulk reads and single-item reads return the metadata
//! projection only; the binary payload is fetched exclusively through
//! [`ContentRepository::get_file`].

use sqlx::SqlitePool;

use super::item::{ContentItem, NewContentItem};
use crate::{Result, ShelfError};

/// A stored file payload with its declared metadata.
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// Original filename.
    pub file_name: String,
    /// Declared media type.
    pub file_type: Option<String>,
    /// Raw payload bytes.
    pub file_data: Vec<u8>,
}

/// Repository for content item CRUD operations.
pub struct ContentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new ContentRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all content items, newest first.
    ///
    /// Never includes `file_data`.
    pub async fn list(&self) -> Result<Vec<ContentItem>> {
        let items = sqlx::query_as::<_, ContentItem>(
            "SELECT id, title, description, category, language, provider, role,
                    file_name, file_type, created_at
             FROM content_items
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(items)
    }

    /// Get a content item's metadata by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ContentItem>> {
        let item = sqlx::query_as::<_, ContentItem>(
            "SELECT id, title, description, category, language, provider, role,
                    file_name, file_type, created_at
             FROM content_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(item)
    }

    /// Get a content item's stored file by ID.
    ///
    /// Returns `None` when the row does not exist or has no stored payload.
    pub async fn get_file(&self, id: i64) -> Result<Option<ContentFile>> {
        let row: Option<(Option<String>, Option<String>, Option<Vec<u8>>)> = sqlx::query_as(
            "SELECT file_name, file_type, file_data FROM content_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        Ok(match row {
            Some((Some(file_name), file_type, Some(file_data))) => Some(ContentFile {
                file_name,
                file_type,
                file_data,
            }),
            _ => None,
        })
    }

    /// Create a new content item.
    ///
    /// Returns the created item's metadata with the server-assigned ID and
    /// timestamp.
    pub async fn create(&self, new_item: &NewContentItem) -> Result<ContentItem> {
        let (file_name, file_type, file_data) = match &new_item.file {
            Some(f) => (
                Some(f.name.as_str()),
                Some(f.content_type.as_str()),
                Some(f.data.as_slice()),
            ),
            None => (None, None, None),
        };

        let result = sqlx::query(
            "INSERT INTO content_items
                (title, description, category, language, provider, role,
                 file_name, file_type, file_data)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_item.title)
        .bind(&new_item.description)
        .bind(&new_item.category)
        .bind(&new_item.language)
        .bind(&new_item.provider)
        .bind(&new_item.role)
        .bind(file_name)
        .bind(file_type)
        .bind(file_data)
        .execute(self.pool)
        .await
        .map_err(|e| ShelfError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| ShelfError::NotFound("content item".to_string()))
    }
}
