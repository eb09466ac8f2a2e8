//! Presence checks shared by the project and action field sets.
//!
//! These only decide whether a value was supplied. Content is stored as
//! given, so a string of spaces is a supplied value. Only an absent or
//! empty string counts as missing.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Require a non-empty string value
#[track_caller]
pub fn require_text(field: &'static str, value: Option<String>) -> CoreErrorResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(missing(field, Location::caller())),
    }
}

/// Require a record identifier. Zero and negative ids are never assigned.
#[track_caller]
pub fn require_id(field: &'static str, value: Option<i64>) -> CoreErrorResult<i64> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(missing(field, Location::caller())),
    }
}

/// Require that a value is present at all
#[track_caller]
pub fn require_value<T>(field: &'static str, value: Option<T>) -> CoreErrorResult<T> {
    let location = Location::caller();
    value.ok_or_else(|| missing(field, location))
}

fn missing(field: &'static str, location: &'static Location<'static>) -> CoreError {
    CoreError::MissingField {
        field,
        location: ErrorLocation::from(location),
    }
}
