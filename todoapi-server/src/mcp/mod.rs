//! MCP endpoint
//!
//! Exposes the todo operations as Model Context Protocol tools over
//! JSON-RPC at `POST /mcp`.

pub mod jsonrpc;
pub mod tools;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::store::TodoStore;
use jsonrpc::{
    json_rpc_error, json_rpc_response, JsonRpcRequest, INVALID_PARAMS, METHOD_NOT_FOUND,
    PARSE_ERROR,
};
use tools::ToolError;

/// Protocol version answered when the client does not name one.
pub const MCP_VERSION: &str = "2024-11-05";

pub const SERVER_NAME: &str = "todoapi";

/// MCP routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/mcp", post(handle))
}

async fn handle(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("mcp parse error: {}", e);
            let error = json_rpc_error(None, PARSE_ERROR, &format!("Parse error: {e}"));
            return Json(error).into_response();
        }
    };

    match dispatch(&state.store, request).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Answer one JSON-RPC message; `None` for notifications.
pub async fn dispatch(store: &TodoStore, request: JsonRpcRequest) -> Option<Value> {
    let notification = request.is_notification();
    let method = request.method.as_str();
    tracing::debug!(method, "mcp request");

    if notification {
        // `notifications/initialized` and anything else without an id
        return None;
    }

    match method {
        "initialize" => {
            let protocol_version = request
                .params
                .as_ref()
                .and_then(|v| v.get("protocolVersion"))
                .and_then(|v| v.as_str())
                .unwrap_or(MCP_VERSION);

            Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": protocol_version,
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "capabilities": { "tools": {} }
                }),
            ))
        }
        "ping" => Some(json_rpc_response(request.id, json!({}))),
        "tools/list" => Some(json_rpc_response(
            request.id,
            json!({ "tools": tools::tool_definitions() }),
        )),
        "tools/call" => Some(call(store, request.id, request.params).await),
        other => Some(json_rpc_error(
            request.id,
            METHOD_NOT_FOUND,
            &format!("Method not found: {other}"),
        )),
    }
}

async fn call(store: &TodoStore, id: Option<Value>, params: Option<Value>) -> Value {
    let Some(Value::Object(params)) = params else {
        return json_rpc_error(id, INVALID_PARAMS, "params must be an object");
    };

    let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
    // `"arguments": null` is the same as no arguments
    let args = match params.get("arguments") {
        None | Some(Value::Null) => json!({}),
        Some(v) => v.clone(),
    };

    let (text, is_error) = match tools::call_tool(store, name, args).await {
        Ok(payload) => (payload.to_string(), false),
        Err(ToolError::UnknownTool(name)) => {
            return json_rpc_error(id, INVALID_PARAMS, &format!("Unknown tool: {name}"));
        }
        Err(ToolError::Store(e)) => {
            tracing::error!("Storage error: {}", e);
            ("Internal Server Error".to_string(), true)
        }
        Err(e) => (e.to_string(), true),
    };

    json_rpc_response(
        id,
        json!({
            "content": [{ "type": "text", "text": text }],
            "isError": is_error
        }),
    )
}
