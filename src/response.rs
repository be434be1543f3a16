//! Response bodies shared by handlers and error mapping.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use serde_json::{json, Value};

/// Key of the delete acknowledgement, as emitted by the legacy service.
pub const LEGACY_DELETED_KEY: &str = "professor deleteed";
pub const DELETED_KEY: &str = "professor deleted";

pub fn error_body(message: String) -> Value {
    json!({ "error": message })
}

pub fn deleted_body(id: i32, wire_compat: bool) -> Value {
    let key = if wire_compat { LEGACY_DELETED_KEY } else { DELETED_KEY };
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), Value::from(id));
    Value::Object(body)
}

/// Middleware for compat mode: every client or server error leaves as 400, body untouched.
pub async fn collapse_error_status(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        *response.status_mut() = StatusCode::BAD_REQUEST;
    }
    response
}
