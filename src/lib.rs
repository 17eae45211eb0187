//! Skillshelf - content-management backend.
//!
//! Upload metadata-tagged learning material (title, description, category,
//! language, provider, role), optionally with a file payload, and list or
//! download it over a small JSON/multipart HTTP API.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use config::Config;
pub use content::{
    validate_upload, ContentFile, ContentItem, ContentRepository, NewContentItem, StoredFile,
    UploadedFile, ACCEPTED_FILE_TYPES,
};
pub use db::Database;
pub use error::{Result, ShelfError};
pub use web::WebServer;
