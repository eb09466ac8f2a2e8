use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &pa_config::Config) -> Self {
        Self {
            pool,
            request_timeout: config.handler.timeout(),
            max_body_bytes: config.server.max_body_bytes,
        }
    }
}
