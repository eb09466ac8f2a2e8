use pa_core::{ActionFields, ProjectFields};

/// Creates project fields with sensible defaults
pub fn project_fields(name: &str) -> ProjectFields {
    ProjectFields {
        name: name.to_string(),
        description: format!("{} description", name),
        completed: false,
    }
}

/// Creates action fields for the given project
pub fn action_fields(project_id: i64, description: &str) -> ActionFields {
    ActionFields {
        project_id,
        description: description.to_string(),
        notes: format!("Notes for {}", description),
        completed: false,
    }
}
