use pa_core::{ActionFields, Result as CoreErrorResult, require_value};

use serde::Deserialize;

/// Full replacement of an action's fields. Every field is required,
/// including `completed`.
#[derive(Debug, Deserialize)]
pub struct UpdateActionRequest {
    #[serde(default)]
    pub project_id: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateActionRequest {
    #[track_caller]
    pub fn into_fields(self) -> CoreErrorResult<ActionFields> {
        let completed = self.completed;
        let fields = ActionFields::new(self.project_id, self.description, self.notes, completed)?;
        require_value("completed", completed)?;

        Ok(fields)
    }
}
