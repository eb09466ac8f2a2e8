use crate::{Result as CoreErrorResult, require_id, require_text};

use serde::{Deserialize, Serialize};

/// Validated column values for inserting or replacing an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFields {
    pub project_id: i64,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

impl ActionFields {
    /// Build the field set from raw request input.
    ///
    /// Fields are checked in the order `description`, `notes`, `project_id`.
    /// An absent `completed` flag defaults to false; callers that need the
    /// flag to be explicit check it before calling this.
    #[track_caller]
    pub fn new(
        project_id: Option<i64>,
        description: Option<String>,
        notes: Option<String>,
        completed: Option<bool>,
    ) -> CoreErrorResult<Self> {
        let description = require_text("description", description)?;
        let notes = require_text("notes", notes)?;
        let project_id = require_id("project_id", project_id)?;

        Ok(Self {
            project_id,
            description,
            notes,
            completed: completed.unwrap_or(false),
        })
    }
}
