pub mod analytics;
pub mod panel;

use axum::{http::StatusCode, response::Json};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
