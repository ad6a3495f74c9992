use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, is_contained_relative_path};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_contained_relative_path(&self.path) {
            return Err(ConfigError::database(
                "database.path must be a non-empty relative path without '..' components",
            ));
        }
        Ok(())
    }
}
