//! JSON-RPC tests of the `/mcp` endpoint through the full router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use todoapi_server::{build_router, AppState, ServerConfig, TodoStore};

struct McpClient {
    router: Router,
    _dir: TempDir,
}

impl McpClient {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = TodoStore::open(dir.path().join("todos.db")).await.unwrap();
        let router = build_router(AppState::new(store), &ServerConfig::default());
        Self { router, _dir: dir }
    }

    async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn rpc(&self, method: &str, params: Value) -> Value {
        let message = json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params});
        let (status, body) = self.post_raw(&message.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        body
    }

    /// `tools/call` result, with the text content decoded.
    async fn call(&self, name: &str, arguments: Value) -> (bool, String) {
        let body = self
            .rpc("tools/call", json!({"name": name, "arguments": arguments}))
            .await;
        let result = &body["result"];
        let text = result["content"][0]["text"].as_str().unwrap().to_string();
        (result["isError"].as_bool().unwrap(), text)
    }
}

#[tokio::test]
async fn initialize_echoes_protocol_version() {
    let client = McpClient::new().await;
    let body = client
        .rpc("initialize", json!({"protocolVersion": "2025-03-26"}))
        .await;

    assert_eq!(body["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(body["result"]["serverInfo"]["name"], "todoapi");
    assert!(body["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn initialized_notification_gets_no_reply() {
    let client = McpClient::new().await;
    let (status, body) = client
        .post_raw(r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#)
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn tools_list_names_every_todo_operation() {
    let client = McpClient::new().await;
    let body = client.rpc("tools/list", json!({})).await;

    let mut names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "create_todo",
            "delete_todo",
            "get_all_todos",
            "get_todo",
            "root",
            "update_todo"
        ]
    );
}

#[tokio::test]
async fn tool_created_todo_is_visible_over_http() {
    let client = McpClient::new().await;
    let (is_error, text) = client
        .call("create_todo", json!({"content": "Buy milk"}))
        .await;
    assert!(!is_error);

    let created: Value = serde_json::from_str(&text).unwrap();
    let id = created["todo_id"].as_i64().unwrap();
    assert_eq!(created["completed"], false);

    let (is_error, text) = client.call("get_todo", json!({"todo_id": id})).await;
    assert!(!is_error);
    let fetched: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(fetched, created);

    let request = Request::get(format!("/todos/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = client.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_missing_todo_is_tool_error() {
    let client = McpClient::new().await;
    let (is_error, text) = client.call("get_todo", json!({"todo_id": 9999})).await;

    assert!(is_error);
    assert_eq!(text, "Todo with id 9999 not found");
}

#[tokio::test]
async fn unknown_tool_is_invalid_params() {
    let client = McpClient::new().await;
    let body = client
        .rpc("tools/call", json!({"name": "drop_table", "arguments": {}}))
        .await;

    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let client = McpClient::new().await;
    let body = client.rpc("resources/subscribe", json!({})).await;

    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(
        body["error"]["message"],
        "Method not found: resources/subscribe"
    );
}

#[tokio::test]
async fn unparseable_message_is_parse_error() {
    let client = McpClient::new().await;
    let (status, body) = client.post_raw("{not json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["id"], Value::Null);
}
