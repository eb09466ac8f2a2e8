pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{DatabaseOptions, connect, connect_in_memory, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::action_repository::ActionRepository;
pub use repositories::project_repository::ProjectRepository;
