use pa_core::{ActionFields, Result as CoreErrorResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateActionRequest {
    /// Owning project (required, must exist)
    #[serde(default)]
    pub project_id: Option<i64>,

    /// Short description (required)
    #[serde(default)]
    pub description: Option<String>,

    /// Free-form notes (required)
    #[serde(default)]
    pub notes: Option<String>,

    /// Defaults to false
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateActionRequest {
    #[track_caller]
    pub fn into_fields(self) -> CoreErrorResult<ActionFields> {
        ActionFields::new(self.project_id, self.description, self.notes, self.completed)
    }
}
