use pa_core::{ProjectFields, Result as CoreErrorResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name (required)
    #[serde(default)]
    pub name: Option<String>,

    /// Project description (required)
    #[serde(default)]
    pub description: Option<String>,

    /// Defaults to false
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateProjectRequest {
    #[track_caller]
    pub fn into_fields(self) -> CoreErrorResult<ProjectFields> {
        ProjectFields::new(self.name, self.description, self.completed)
    }
}
