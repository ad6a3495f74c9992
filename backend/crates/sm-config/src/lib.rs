mod auth_config;
mod config;
mod database_config;
mod error;
mod follow_config;
mod log_level;
mod logging_config;
mod media_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use follow_config::FollowConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use media_config::MediaConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "SM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 7 * 24 * 3600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_UPLOAD_DIR: &str = "upload/users";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MIN_MAX_UPLOAD_BYTES: usize = 1024;
const MAX_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const DEFAULT_RETRY_ON_CONFLICT: bool = true;

/// A relative path with no `..` component
fn is_contained_relative_path(value: &str) -> bool {
    let path = std::path::Path::new(value);
    !value.is_empty()
        && path.is_relative()
        && !path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
}
