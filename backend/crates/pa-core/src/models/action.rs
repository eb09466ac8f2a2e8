//! Action entity - a task belonging to exactly one project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    /// Owning project; must exist when the action is created
    pub project_id: i64,
    pub description: String,
    pub notes: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Action {
    pub fn belongs_to(&self, project_id: i64) -> bool {
        self.project_id == project_id
    }
}
