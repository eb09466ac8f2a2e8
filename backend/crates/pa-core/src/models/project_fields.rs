use crate::{Result as CoreErrorResult, require_text};

use serde::{Deserialize, Serialize};

/// Validated column values for inserting or replacing a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl ProjectFields {
    /// Build the field set from raw request input.
    ///
    /// `name` and `description` must be non-empty. An absent `completed`
    /// flag means the project is not completed.
    #[track_caller]
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> CoreErrorResult<Self> {
        Ok(Self {
            name: require_text("name", name)?,
            description: require_text("description", description)?,
            completed: completed.unwrap_or(false),
        })
    }
}
