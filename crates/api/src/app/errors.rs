use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use wardrobe_core::DomainError;

/// Error codes carried in every error body. The codes are part of the wire
/// contract; clients branch on them rather than on messages.
pub const CODE_DUPLICATE: &str = "4001";
pub const CODE_INVALID_ARGUMENT: &str = "4002";
pub const CODE_INVALID_FIELD: &str = "4003";
pub const CODE_MISSING_PARAMETER: &str = "4004";
pub const CODE_UNREADABLE_BODY: &str = "4005";
pub const CODE_NOT_FOUND: &str = "4040";
pub const CODE_INTERNAL: &str = "5000";

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": {
                "message": message.into(),
                "code": code,
            }
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, CODE_INVALID_ARGUMENT, msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, CODE_DUPLICATE, msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, CODE_NOT_FOUND, msg),
        DomainError::InvalidId(msg) => {
            json_error(StatusCode::BAD_REQUEST, CODE_INVALID_ARGUMENT, msg)
        }
    }
}

/// Missing or out-of-range request body field.
pub fn invalid_field(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, CODE_INVALID_FIELD, message)
}

/// Body failed to parse as JSON matching the request shape.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        CODE_UNREADABLE_BODY,
        rejection.body_text(),
    )
}

pub fn internal_error(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, CODE_INTERNAL, message)
}
