//! Request extractors that reject with [`AppError`] JSON bodies instead of
//! axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use memo_core::types::DbId;

use crate::error::AppError;

/// Message returned when an `{id}` path segment is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";

/// JSON request body. Decoding failures become a 400 `VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// The `{id}` path parameter, parsed as a base-10 integer.
///
/// Being a parts extractor, it runs before any body extractor, so a
/// malformed id is reported without reading the body.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A segment that does not even decode (e.g. invalid UTF-8) is just
        // another malformed id.
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))?;
        parse_id(&raw).map(PathId)
    }
}

/// Parse a raw path segment as a record id.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}
