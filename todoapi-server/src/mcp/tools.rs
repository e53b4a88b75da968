//! Todo operations exposed as MCP tools
//!
//! Each tool mirrors one HTTP operation and shares its operation id, so a
//! client sees the same names in `/openapi.json` and in `tools/list`.

use serde::Deserialize;
use serde_json::{json, Value};
use todoapi_core::{NewTodo, TodoPatch};

use crate::http::routes::root::WELCOME_MESSAGE;
use crate::store::{StoreError, TodoStore};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Todo with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Deserialize)]
struct TodoIdArgs {
    todo_id: i64,
}

#[derive(Deserialize)]
struct UpdateArgs {
    todo_id: i64,
    #[serde(flatten)]
    patch: TodoPatch,
}

fn todo_id_schema() -> Value {
    json!({ "type": "integer", "description": "Todo id" })
}

/// Tool definitions for `tools/list`.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "root",
            "description": "Welcome message for the ToDo API",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "get_all_todos",
            "description": "List every todo item, ordered by id",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "get_todo",
            "description": "Fetch one todo item by id",
            "inputSchema": {
                "type": "object",
                "properties": { "todo_id": todo_id_schema() },
                "required": ["todo_id"]
            }
        }),
        json!({
            "name": "create_todo",
            "description": "Create a todo item; the server assigns its id",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "content": { "type": "string" },
                    "completed": { "type": "boolean", "default": false }
                },
                "required": ["content"]
            }
        }),
        json!({
            "name": "update_todo",
            "description": "Update a todo item; omitted fields keep their value",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "todo_id": todo_id_schema(),
                    "content": { "type": "string" },
                    "completed": { "type": "boolean" }
                },
                "required": ["todo_id"]
            }
        }),
        json!({
            "name": "delete_todo",
            "description": "Delete a todo item by id",
            "inputSchema": {
                "type": "object",
                "properties": { "todo_id": todo_id_schema() },
                "required": ["todo_id"]
            }
        }),
    ]
}

fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Run a tool against the store and return its JSON payload.
pub async fn call_tool(store: &TodoStore, name: &str, args: Value) -> Result<Value, ToolError> {
    match name {
        "root" => Ok(json!({ "message": WELCOME_MESSAGE })),
        "get_all_todos" => Ok(json!(store.list_all().await?)),
        "get_todo" => {
            let TodoIdArgs { todo_id } = parse_args(args)?;
            let todo = store.get(todo_id).await?.ok_or(ToolError::NotFound(todo_id))?;
            Ok(json!(todo))
        }
        "create_todo" => {
            let new: NewTodo = parse_args(args)?;
            let todo_id = store.insert(&new.content, new.completed).await?;
            tracing::info!(todo_id, "created todo via mcp");
            Ok(json!({ "todo_id": todo_id, "content": new.content, "completed": new.completed }))
        }
        "update_todo" => {
            let UpdateArgs { todo_id, patch } = parse_args(args)?;
            let current = store.get(todo_id).await?.ok_or(ToolError::NotFound(todo_id))?;
            let merged = current.apply(patch);
            store
                .update(merged.todo_id, &merged.content, merged.completed)
                .await?;
            tracing::info!(todo_id, "updated todo via mcp");
            Ok(json!(merged))
        }
        "delete_todo" => {
            let TodoIdArgs { todo_id } = parse_args(args)?;
            if store.get(todo_id).await?.is_none() {
                return Err(ToolError::NotFound(todo_id));
            }
            store.delete(todo_id).await?;
            tracing::info!(todo_id, "deleted todo via mcp");
            Ok(json!({ "todo_id": todo_id, "deleted": true }))
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}
