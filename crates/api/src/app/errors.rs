use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use stockroom_core::DomainError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body was not JSON, or did not fit the expected shape.
    #[error("{0}")]
    InvalidJson(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidJson(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Domain(DomainError::Validation(_)) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", message)
            }
            ApiError::Domain(DomainError::InvalidId(_)) => {
                json_error(StatusCode::BAD_REQUEST, "invalid_id", message)
            }
            ApiError::InvalidJson(_) => json_error(StatusCode::BAD_REQUEST, "invalid_json", message),
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
