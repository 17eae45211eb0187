//! Content item types for Skillshelf.

use chrono::NaiveDateTime;

use crate::content::upload::StoredFile;

/// Category options offered by the upload form.
pub const CATEGORIES: &[&str] = &[
    "Leadership",
    "Managing Complexity",
    "Communication",
    "Problem Solving",
    "Teamwork",
];

/// Language options offered by the upload form (short locale codes).
pub const LANGUAGES: &[&str] = &["en", "it", "es", "fr", "de"];

/// Provider options offered by the upload form.
pub const PROVIDERS: &[&str] = &["Skilla", "Linkedin", "Pack", "Mentor", "External"];

/// Role options offered by the upload form.
pub const ROLE_OPTIONS: &[&str] = &["Mentor/Coach", "Mentee/Coachee"];

/// A content item's metadata columns.
///
/// This is the projection returned to callers; the binary payload is only
/// ever fetched through [`ContentRepository::get_file`].
///
/// [`ContentRepository::get_file`]: crate::content::ContentRepository::get_file
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContentItem {
    /// Unique item ID.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Category name.
    pub category: String,
    /// Language code.
    pub language: String,
    /// Provider name.
    pub provider: String,
    /// Target role.
    pub role: String,
    /// Original filename, present iff a file was uploaded.
    pub file_name: Option<String>,
    /// Declared media type, present iff a file was uploaded.
    pub file_type: Option<String>,
    /// When the item was created (UTC).
    pub created_at: NaiveDateTime,
}

/// Data for creating a new content item.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    /// Item title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Category name.
    pub category: String,
    /// Language code.
    pub language: String,
    /// Provider name.
    pub provider: String,
    /// Target role.
    pub role: String,
    /// Validated file payload, if one was uploaded.
    pub file: Option<StoredFile>,
}

impl NewContentItem {
    /// Create a new NewContentItem without a file.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        language: impl Into<String>,
        provider: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: category.into(),
            language: language.into(),
            provider: provider.into(),
            role: role.into(),
            file: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a validated file payload.
    pub fn with_file(mut self, file: StoredFile) -> Self {
        self.file = Some(file);
        self
    }
}
