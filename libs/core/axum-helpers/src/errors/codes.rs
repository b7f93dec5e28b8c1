//! Error codes carried by every error body.
//!
//! Each code has a string identifier for clients, an integer for logs and
//! dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.default_message(), "Invalid identifier");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Path identifier is not a valid integer
    InvalidId,

    /// Non-identifier path parameter is not a valid integer
    InvalidParameter,

    /// Request body could not be parsed
    JsonExtraction,

    NotFound,

    MethodNotAllowed,

    // Database errors (2000-2999)
    /// Query returned no row where one was required
    DatabaseNotFound,

    /// No connection could be acquired from the pool
    DatabaseConnection,

    /// Statement failed to execute
    DatabaseQuery,

    /// Row could not be mapped into a model
    DatabaseDecode,

    DatabaseUnhandled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseQuery => "DATABASE_QUERY",
            Self::DatabaseDecode => "DATABASE_DECODE",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1006,
            Self::InvalidParameter => 1007,

            Self::DatabaseNotFound => 2001,
            Self::DatabaseConnection => 2002,
            Self::DatabaseQuery => 2003,
            Self::DatabaseDecode => 2010,
            Self::DatabaseUnhandled => 2099,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidId => "Invalid identifier",
            Self::InvalidParameter => "Invalid path parameter",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::DatabaseNotFound => "Database record not found",
            Self::DatabaseConnection => "Database is unavailable",
            Self::DatabaseQuery => "Database error occurred",
            Self::DatabaseDecode => "Failed to decode database response",
            Self::DatabaseUnhandled => "Unhandled database error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
