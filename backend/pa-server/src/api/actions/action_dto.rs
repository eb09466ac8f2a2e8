use pa_core::Action;

use serde::Serialize;

/// Action DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ActionDto {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub notes: String,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Action> for ActionDto {
    fn from(a: Action) -> Self {
        Self {
            id: a.id,
            project_id: a.project_id,
            description: a.description,
            notes: a.notes,
            completed: a.completed,
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
