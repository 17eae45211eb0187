//! Error types for Skillshelf.

use thiserror::Error;

/// Common error type for Skillshelf.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Database connection could not be established.
    #[error("database connection error: {0}")]
    Connection(String),

    /// Schema setup was rejected by the store.
    #[error("schema error: {0}")]
    Schema(String),

    /// Generic database error during a read or write.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Uploaded file's declared media type is not on the allow-list.
    #[error("unsupported file type '{declared}'. Acceptable types are PDF, TXT, PPT, PPTX, DOC, DOCX, MP4, AVI, and MOV")]
    UnsupportedFileType {
        /// The media type the client declared.
        declared: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Store-level failures other than connect/schema collapse into Database
impl From<sqlx::Error> for ShelfError {
    fn from(e: sqlx::Error) -> Self {
        ShelfError::Database(e.to_string())
    }
}

/// Result type alias for Skillshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
