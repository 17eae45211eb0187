//! Web API module for Skillshelf.
//!
//! HTTP-facing surface: routing, shared state, DTO envelopes, and the
//! endpoint-boundary error translation.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
