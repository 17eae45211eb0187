//! API handlers for the Skillshelf Web API.

pub mod content;

pub use content::*;

use std::sync::Arc;

use crate::db::Database;

/// Shared database handle.
pub type SharedDatabase = Arc<Database>;

/// Shared application state for the Web API.
pub struct AppState {
    /// Database handle (pooled; safe for concurrent borrowing).
    pub db: SharedDatabase,
    /// Maximum upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase, max_upload_size: u64) -> Self {
        Self {
            db,
            max_upload_size,
        }
    }
}
