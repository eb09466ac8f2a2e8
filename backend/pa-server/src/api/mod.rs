pub mod actions;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod projects;
