use axum::{http::StatusCode, response::Json};
use serde::Serialize;

/// Error body shared by every route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Handler error type: status plus JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, code: &str, error: &str, details: Option<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.to_string(),
            details,
        }),
    )
}
