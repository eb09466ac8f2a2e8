use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => field,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
