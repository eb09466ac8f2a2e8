use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_ACQUIRE_TIMEOUT_SECS, MAX_DATABASE_MAX_CONNECTIONS,
    MIN_ACQUIRE_TIMEOUT_SECS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Database must stay inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DATABASE_MAX_CONNECTIONS
            || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.acquire_timeout_secs < MIN_ACQUIRE_TIMEOUT_SECS
            || self.acquire_timeout_secs > MAX_ACQUIRE_TIMEOUT_SECS
        {
            return Err(ConfigError::database(format!(
                "database.acquire_timeout_secs must be {}-{}, got {}",
                MIN_ACQUIRE_TIMEOUT_SECS, MAX_ACQUIRE_TIMEOUT_SECS, self.acquire_timeout_secs
            )));
        }

        Ok(())
    }
}
