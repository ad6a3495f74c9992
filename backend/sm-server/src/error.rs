use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sm_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] sm_auth::AuthError),

    #[error("Invalid input: {0}")]
    Core(#[from] sm_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
