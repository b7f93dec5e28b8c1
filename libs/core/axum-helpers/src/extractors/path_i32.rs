//! Integer path parameter that is not an identifier.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single `i32` path parameter such as a threshold or a count.
///
/// Rejects with a 400 `INVALID_PARAMETER` body. Use [`super::IdPath`] for
/// identifiers.
///
/// ```ignore
/// async fn scarce(PathI32(quantity): PathI32) -> String {
///     format!("below {}", quantity)
/// }
///
/// let app = Router::new().route("/scarce/{quantity}", get(scarce));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathI32(pub i32);

impl<S> FromRequestParts<S> for PathI32
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.trim()
            .parse::<i32>()
            .map(PathI32)
            .map_err(|_| AppError::InvalidParameter(raw).into_response())
    }
}
