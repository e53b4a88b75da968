//! Root greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the ToDo API! Visit /docs for API documentation.";

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    operation_id = "root",
    responses((status = 200, description = "Welcome message", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
