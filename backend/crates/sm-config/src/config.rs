use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, FollowConfig, LoggingConfig, MediaConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub media: MediaConfig,
    pub follow: FollowConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SM_CONFIG_DIR env var, else use ./.sm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: SM_CONFIG_DIR env var > ./.sm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.media.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn media_root(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.media.root))
    }

    /// Resolved log file path, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Secrets are never printed.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {} (token ttl {}s)",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  media: root={}, upload_dir={}, max_upload={}B, filename_strategy={}",
            self.media.root,
            self.media.upload_dir,
            self.media.max_upload_bytes,
            self.media.filename_strategy.as_str()
        );
        info!(
            "  follow: retry_on_conflict={}",
            self.follow.retry_on_conflict
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("SM_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("SM_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("SM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("SM_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("SM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SM_LOG_FILE", &mut self.logging.file);

        // Media
        Self::apply_env_string("SM_MEDIA_ROOT", &mut self.media.root);
        Self::apply_env_string("SM_MEDIA_UPLOAD_DIR", &mut self.media.upload_dir);
        Self::apply_env_parse(
            "SM_MEDIA_MAX_UPLOAD_BYTES",
            &mut self.media.max_upload_bytes,
        );
        Self::apply_env_parse(
            "SM_MEDIA_FILENAME_STRATEGY",
            &mut self.media.filename_strategy,
        );

        // Follow
        Self::apply_env_bool(
            "SM_FOLLOW_RETRY_ON_CONFLICT",
            &mut self.follow.retry_on_conflict,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1", anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
