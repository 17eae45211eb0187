//! Content item domain for Skillshelf.
//!
//! Types, upload validation, and the persistence gateway for content items.

mod item;
mod repository;
pub mod upload;

pub use item::{ContentItem, NewContentItem, CATEGORIES, LANGUAGES, PROVIDERS, ROLE_OPTIONS};
pub use repository::{ContentFile, ContentRepository};
pub use upload::{validate_upload, StoredFile, UploadedFile, ACCEPTED_FILE_TYPES};
