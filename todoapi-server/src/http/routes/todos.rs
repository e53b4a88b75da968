//! Todo endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use todoapi_core::{NewTodo, Todo, TodoPatch};

use crate::http::error::{ApiError, ErrorDetail};
use crate::http::extractors::{TodoId, ValidJson};
use crate::http::server::AppState;

/// GET /todos - every todo, ordered by id
#[utoipa::path(
    get,
    path = "/todos",
    tag = "Todos",
    operation_id = "get_all_todos",
    responses((status = 200, description = "All todo items", body = Vec<Todo>))
)]
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos))
}

/// GET /todos/{todo_id}
#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "Todos",
    operation_id = "get_todo",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo item", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorDetail)
    )
)]
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { id })?;
    Ok(Json(todo))
}

/// POST /todos - create a todo, the store assigns the id
#[utoipa::path(
    post,
    path = "/todos",
    tag = "Todos",
    operation_id = "create_todo",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Created todo with its assigned id", body = Todo),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    )
)]
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo_id = state.store.insert(&req.content, req.completed).await?;
    tracing::info!(todo_id, "created todo");

    Ok((
        StatusCode::CREATED,
        Json(Todo {
            todo_id,
            content: req.content,
            completed: req.completed,
        }),
    ))
}

/// PUT /todos/{todo_id} - partial update; omitted fields keep their value
#[utoipa::path(
    put,
    path = "/todos/{todo_id}",
    tag = "Todos",
    operation_id = "update_todo",
    params(("todo_id" = i64, Path, description = "Todo id")),
    request_body = TodoPatch,
    responses(
        (status = 200, description = "The merged todo item", body = Todo),
        (status = 404, description = "No todo with this id", body = ErrorDetail),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    )
)]
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ValidJson(patch): ValidJson<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let current = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    let content_changed = patch.content.is_some();
    let completed = patch.completed;
    let merged = current.apply(patch);
    state
        .store
        .update(merged.todo_id, &merged.content, merged.completed)
        .await?;
    tracing::info!(todo_id = id, content_changed, ?completed, "updated todo");

    Ok(Json(merged))
}

/// DELETE /todos/{todo_id}
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = "Todos",
    operation_id = "delete_todo",
    params(("todo_id" = i64, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No todo with this id", body = ErrorDetail)
    )
)]
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<StatusCode, ApiError> {
    if state.store.get(id).await?.is_none() {
        return Err(ApiError::NotFound { id });
    }

    state.store.delete(id).await?;
    tracing::info!(todo_id = id, "deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
