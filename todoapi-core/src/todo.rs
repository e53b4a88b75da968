//! The todo entity and the payloads that create or modify it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub todo_id: i64,
    pub content: String,
    pub completed: bool,
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `PUT /todos/{id}`.
///
/// A missing field and an explicit `null` both leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct TodoPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl Todo {
    /// Overlay the fields present in `patch` onto this todo.
    pub fn apply(self, patch: TodoPatch) -> Self {
        Self {
            todo_id: self.todo_id,
            content: patch.content.unwrap_or(self.content),
            completed: patch.completed.unwrap_or(self.completed),
        }
    }
}
