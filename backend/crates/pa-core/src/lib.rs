pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::action::Action;
pub use models::action_fields::ActionFields;
pub use models::project::Project;
pub use models::project_fields::ProjectFields;
pub use validation::{require_id, require_text, require_value};
