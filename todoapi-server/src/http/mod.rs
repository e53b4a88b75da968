//! HTTP layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing and per-request timeout
//! - Graceful shutdown
//! - JSON error responses (`{"detail": ...}`)
//! - OpenAPI document and Swagger UI

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
