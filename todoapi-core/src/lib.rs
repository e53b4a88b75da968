//! Domain types shared by the todo API server and CLI.

pub mod config;
pub mod error;
pub mod todo;

pub use config::{DatabaseConfig, ServerSection, TodoConfig};
pub use error::{CoreError, Result};
pub use todo::{NewTodo, Todo, TodoPatch};
