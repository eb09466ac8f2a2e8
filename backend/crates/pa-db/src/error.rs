use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A write was rejected by a schema constraint (foreign key, NOT NULL, ...)
    #[error("Constraint violation: {message} {location}")]
    Constraint {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// The underlying error text, without source location
    pub fn message(&self) -> String {
        match self {
            Self::Sqlx { source, .. } => source.to_string(),
            Self::Constraint { message, .. }
            | Self::Migration { message, .. }
            | Self::Initialization { message, .. } => message.clone(),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_error) = source
            && matches!(
                db_error.kind(),
                ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
                    | ErrorKind::UniqueViolation
            )
        {
            return Self::Constraint {
                message: db_error.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
