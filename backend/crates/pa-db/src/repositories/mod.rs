pub mod action_repository;
pub mod project_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert a stored Unix timestamp back into a `DateTime`
#[track_caller]
pub(crate) fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let location = ErrorLocation::from(Location::caller());
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}: {}", column, seconds),
        location,
    })
}
