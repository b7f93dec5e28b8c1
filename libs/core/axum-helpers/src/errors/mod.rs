pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1002,
///   "error": "INVALID_ID",
///   "message": "Invalid identifier: abc",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid path parameter: {0}")]
    InvalidParameter(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Database(e) => {
                let (status, code) = classify_db_error(&e);
                if status.is_server_error() {
                    tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                } else {
                    tracing::info!(error_code = code.code(), "Database error: {}", e);
                }
                (status, code.default_message().to_string(), code)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), ErrorCode::JsonExtraction)
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    format!("{}: {}", ErrorCode::InvalidId.default_message(), raw),
                    ErrorCode::InvalidId,
                )
            }
            AppError::InvalidParameter(raw) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidParameter.code(),
                    "Invalid path parameter: {}",
                    raw
                );
                (
                    StatusCode::BAD_REQUEST,
                    format!("{}: {}", ErrorCode::InvalidParameter.default_message(), raw),
                    ErrorCode::InvalidParameter,
                )
            }
        };

        error_response(status, message, code)
    }
}

/// Status and code for a SeaORM error. Driver messages never reach the client.
fn classify_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    match error {
        DbErr::RecordNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound),
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::DatabaseConnection,
        ),
        DbErr::Exec(_) | DbErr::Query(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseQuery)
        }
        DbErr::Type(_) | DbErr::TryIntoErr { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseDecode)
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseUnhandled,
        ),
    }
}

/// Build an [`ErrorResponse`] with the given status.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid identifier: abc".to_string(),
///     ErrorCode::InvalidId,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
