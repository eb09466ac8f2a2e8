#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{action_fields, project_fields};
pub use test_db::{count_rows, create_test_pool};
