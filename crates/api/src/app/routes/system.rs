use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app::errors;

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Fallback for unmatched method/path pairs.
pub async fn unmatched_route() -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_FOUND,
        errors::CODE_NOT_FOUND,
        "no such endpoint",
    )
}
