use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use horta_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Auth(msg) => json_error(StatusCode::UNAUTHORIZED, "unauthorized", msg),
        DomainError::Network(msg) => json_error(StatusCode::BAD_GATEWAY, "network_error", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
