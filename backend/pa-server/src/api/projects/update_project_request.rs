use pa_core::{ProjectFields, Result as CoreErrorResult};

use serde::Deserialize;

/// Full replacement of a project's fields. An omitted `completed` flag
/// resets it to false.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateProjectRequest {
    #[track_caller]
    pub fn into_fields(self) -> CoreErrorResult<ProjectFields> {
        ProjectFields::new(self.name, self.description, self.completed)
    }
}
