//! Project entity - top-level container for actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owns zero or more actions.
/// The id is assigned by the data store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Check if the project has been marked completed
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
