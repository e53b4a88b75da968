//! API error type with IntoResponse
//!
//! Every error body has the shape `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Error body shape, documented in the OpenAPI schema
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No todo with this id (404)
    NotFound { id: i64 },

    /// Request body or path failed to parse (422)
    Validation { message: String },

    /// Storage failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("Todo with id {} not found", id),
            ),
            Self::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_detail() {
        let response = ApiError::NotFound { id: 9999 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Todo with id 9999 not found"})
        );
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let response = ApiError::validation("missing field `content`").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "missing field `content`"})
        );
    }

    #[tokio::test]
    async fn store_error_is_500_without_internals() {
        let err = ApiError::from(StoreError::Sqlx(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Internal Server Error"})
        );
    }
}
