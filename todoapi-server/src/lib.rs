//! todoapi-server: HTTP surface and SQLite storage for todo items
//!
//! The [`store`] module owns every SQL statement; the [`http`] module maps
//! requests onto it and results back onto status codes. The [`mcp`] module
//! exposes the same operations as MCP tools.

pub mod http;
pub mod mcp;
pub mod store;

pub use http::{build_router, run_server, AppState, ServerConfig};
pub use store::{StoreError, TodoStore};
