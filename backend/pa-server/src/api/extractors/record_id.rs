//! Integer record identifier taken from the `{id}` path segment

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use error_location::ErrorLocation;

/// Parsed `{id}` path parameter. Anything that is not an integer is
/// rejected with `VALIDATION_ERROR` before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| ApiError::Validation {
                    message: rejection.body_text(),
                    field: Some("id".into()),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            raw.trim()
                .parse::<i64>()
                .map(RecordId)
                .map_err(|_| ApiError::Validation {
                    message: format!("Invalid ID: '{}'", raw),
                    field: Some("id".into()),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}
