pub mod action;
pub mod action_fields;
pub mod project;
pub mod project_fields;
