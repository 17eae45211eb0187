//! Router configuration for the Skillshelf Web API.

use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_content, download_content_file, get_content, list_content, AppState,
};

/// Slack on top of the payload cap for multipart framing and text fields.
const BODY_LIMIT_OVERHEAD: u64 = 1024 * 1024;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let body_limit = (app_state.max_upload_size + BODY_LIMIT_OVERHEAD) as usize;

    let content_routes = Router::new()
        .route("/content", get(list_content).post(create_content))
        .route("/content/:id", get(get_content))
        .route("/content/:id/file", get(download_content_file));

    Router::new()
        .nest("/api", content_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}

/// Create a CORS layer from the configured origins.
///
/// No configured origins means permissive mode for development.
fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
            .allow_origin(parsed_origins)
    }
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }

    #[test]
    fn test_create_cors_layer_permissive_and_strict() {
        let _permissive = create_cors_layer(&[]);
        let _strict = create_cors_layer(&["http://localhost:5173".to_string()]);
        // Should not panic
    }
}
