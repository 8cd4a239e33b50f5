use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error generating suggestions".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<counsel_core::error::CoreError> for ApiError {
    fn from(e: counsel_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<counsel_engine::error::EngineError> for ApiError {
    fn from(e: counsel_engine::error::EngineError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<counsel_export::error::ExportError> for ApiError {
    fn from(e: counsel_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
