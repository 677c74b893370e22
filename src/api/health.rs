use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

/// Liveness probe. Does not touch configuration or upstreams.
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "message": "OK" })))
}
