//! Content item handlers for the Skillshelf Web API.

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::content::{validate_upload, ContentRepository, NewContentItem, UploadedFile};
use crate::web::dto::{ApiResponse, ContentItemResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Control characters are stripped to prevent header injection, and quotes
/// and backslashes are replaced in the quoted fallback. Non-ASCII filenames
/// additionally get an RFC 5987 `filename*` parameter.
fn content_disposition_header(filename: &str) -> String {
    let needs_escaping = !filename.is_ascii()
        || filename
            .chars()
            .any(|c| c.is_control() || c == '"' || c == '\\');

    if !needs_escaping {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            _ => c,
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized,
        urlencoding::encode(filename)
    )
}

/// GET /api/content - List all content items.
pub async fn list_content(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ContentItemResponse>>>, ApiError> {
    let repo = ContentRepository::new(state.db.pool());

    let items = repo.list().await.map_err(|e| {
        tracing::error!("Failed to list content items: {}", e);
        ApiError::internal("Failed to fetch content items")
    })?;

    let responses: Vec<ContentItemResponse> =
        items.into_iter().map(ContentItemResponse::from).collect();

    Ok(Json(ApiResponse::new(responses)))
}

/// Text fields collected from the upload form.
#[derive(Default)]
struct ContentForm {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    language: Option<String>,
    provider: Option<String>,
    role: Option<String>,
    file: Option<UploadedFile>,
}

impl ContentForm {
    fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
        match field {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ApiError::bad_request(format!(
                "Missing required field: {}",
                name
            ))),
        }
    }

    fn into_new_item(self) -> Result<NewContentItem, ApiError> {
        let mut item = NewContentItem::new(
            Self::require(self.title, "title")?,
            Self::require(self.category, "category")?,
            Self::require(self.language, "language")?,
            Self::require(self.provider, "provider")?,
            Self::require(self.role, "role")?,
        );

        if let Some(description) = self.description {
            if !description.trim().is_empty() {
                item = item.with_description(description);
            }
        }

        match validate_upload(self.file)? {
            Some(stored) => Ok(item.with_file(stored)),
            None => Ok(item),
        }
    }
}

/// POST /api/content - Create a content item from a multipart form.
///
/// Fields: title, description (optional), category, language, provider,
/// role, file (optional).
pub async fn create_content(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ContentItemResponse>>, ApiError> {
    let mut form = ContentForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to read file content: {}", e);
                        ApiError::bad_request("Failed to read file")
                    })?
                    .to_vec();

                // Browsers submit an empty file part when no file is chosen
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                if data.len() as u64 > state.max_upload_size {
                    let max_mb = state.max_upload_size / 1024 / 1024;
                    return Err(ApiError::bad_request(format!(
                        "File too large (max {}MB)",
                        max_mb
                    )));
                }

                form.file = Some(UploadedFile {
                    name: file_name,
                    content_type,
                    data,
                });
            }
            text_field => {
                let value = field.text().await.map_err(|e| {
                    tracing::error!("Failed to read form field: {}", e);
                    ApiError::bad_request("Invalid form field")
                })?;

                match text_field {
                    "title" => form.title = Some(value),
                    "description" => form.description = Some(value),
                    "category" => form.category = Some(value),
                    "language" => form.language = Some(value),
                    "provider" => form.provider = Some(value),
                    "role" => form.role = Some(value),
                    _ => {}
                }
            }
        }
    }

    // Validation happens before any row is written
    let new_item = form.into_new_item()?;

    let repo = ContentRepository::new(state.db.pool());
    let created = repo.create(&new_item).await.map_err(|e| {
        tracing::error!("Failed to create content item: {}", e);
        ApiError::internal("Failed to create content item")
    })?;

    Ok(Json(ApiResponse::new(ContentItemResponse::from(created))))
}

/// GET /api/content/:id - Get a content item's metadata.
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ContentItemResponse>>, ApiError> {
    let repo = ContentRepository::new(state.db.pool());

    let item = repo
        .get_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get content item {}: {}", id, e);
            ApiError::internal("Failed to fetch content item")
        })?
        .ok_or_else(|| ApiError::not_found("Content item not found"))?;

    Ok(Json(ApiResponse::new(ContentItemResponse::from(item))))
}

/// GET /api/content/:id/file - Download a content item's stored file.
///
/// Responds with the raw payload bytes. Failures are plain text on this
/// route since the caller expects a binary body, not a JSON envelope.
pub async fn download_content_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response {
    let repo = ContentRepository::new(state.db.pool());

    let file = match repo.get_file(id).await {
        Ok(Some(file)) => file,
        Ok(None) => return (StatusCode::NOT_FOUND, "File not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch file for content item {}: {}", id, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch file").into_response();
        }
    };

    let content_type = file
        .file_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(&file.file_name),
        )
        .header(header::CONTENT_LENGTH, file.file_data.len())
        .body(Body::from(file.file_data));

    match response {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to build file response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch file").into_response()
        }
    }
}
