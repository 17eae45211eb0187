//! Upload validation for Skillshelf.
//!
//! Checks an uploaded file's declared media type against the fixed
//! allow-list. The declared type is trusted as-is; no byte-content sniffing
//! is performed (known trust-boundary gap).

use crate::{Result, ShelfError};

/// Media types accepted for upload.
///
/// PDF, TXT, PPT, PPTX, DOC, DOCX, MP4, AVI, and MOV.
pub const ACCEPTED_FILE_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "video/mp4",
    "video/x-msvideo",
    "video/quicktime",
];

/// A file as received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-declared filename.
    pub name: String,
    /// Client-declared media type.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// A validated file payload ready for storage.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Original filename.
    pub name: String,
    /// Declared media type (verified against the allow-list).
    pub content_type: String,
    /// Raw bytes, stored inline in the row's BLOB column.
    pub data: Vec<u8>,
}

/// Check whether a declared media type is on the allow-list.
pub fn is_accepted_type(content_type: &str) -> bool {
    ACCEPTED_FILE_TYPES.contains(&content_type)
}

/// Validate an optional uploaded file.
///
/// File attachment is optional per item, so `None` in means `Ok(None)` out.
/// A supplied file whose declared type is off the allow-list fails with
/// [`ShelfError::UnsupportedFileType`]; nothing is persisted in that case.
pub fn validate_upload(file: Option<UploadedFile>) -> Result<Option<StoredFile>> {
    let Some(file) = file else {
        return Ok(None);
    };

    if !is_accepted_type(&file.content_type) {
        return Err(ShelfError::UnsupportedFileType {
            declared: file.content_type,
        });
    }

    Ok(Some(StoredFile {
        name: file.name,
        content_type: file.content_type,
        data: file.data,
    }))
}
