//! OpenAPI document for the HTTP surface, served at `/openapi.json` and
//! browsable at `/docs`.

use todoapi_core::{NewTodo, Todo, TodoPatch};
use utoipa::OpenApi;

use super::error::ErrorDetail;
use super::routes::{health::HealthResponse, root::RootResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToDo API",
        description = "A simple ToDo list management API",
        version = "1.0.0"
    ),
    paths(
        super::routes::root::root,
        super::routes::health::health,
        super::routes::todos::list_todos,
        super::routes::todos::get_todo,
        super::routes::todos::create_todo,
        super::routes::todos::update_todo,
        super::routes::todos::delete_todo,
    ),
    components(schemas(Todo, NewTodo, TodoPatch, ErrorDetail, RootResponse, HealthResponse)),
    tags(
        (name = "Root"),
        (name = "Todos")
    )
)]
pub struct ApiDoc;
