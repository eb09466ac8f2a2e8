mod action;
mod action_fields;
mod project_fields;
