use crate::error::Result as ServerErrorResult;

use sm_auth::{JwtValidator, TokenIssuer};
use sm_config::Config;
use sm_core::{FollowGraph, UploadPathConfig};
use sm_db::SqliteFollowStore;

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Media storage settings resolved from config
#[derive(Debug, Clone)]
pub struct MediaSettings {
    /// Absolute directory uploaded files are written under
    pub root: PathBuf,
    pub upload: UploadPathConfig,
    pub max_upload_bytes: usize,
}

impl MediaSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            upload: UploadPathConfig::default(),
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub graph: FollowGraph<SqliteFollowStore>,
    /// None = auth disabled, callers identify with X-User-Id
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub token_issuer: Option<Arc<TokenIssuer>>,
    pub media: MediaSettings,
}

impl AppState {
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let graph = FollowGraph::new(SqliteFollowStore::new(pool.clone()))
            .with_retry_on_conflict(config.follow.retry_on_conflict);

        let (jwt_validator, token_issuer) = match config.auth.jwt_secret {
            Some(ref secret) => {
                let issuer = TokenIssuer::with_hs256(secret.as_bytes(), config.auth.token_ttl_secs);
                let validator = JwtValidator::with_hs256(secret.as_bytes());
                let validator = if config.auth.enabled {
                    info!("JWT: {} authentication enabled", validator.algorithm());
                    Some(Arc::new(validator))
                } else {
                    None
                };
                (validator, Some(Arc::new(issuer)))
            }
            None => (None, None),
        };

        if jwt_validator.is_none() {
            warn!("Authentication DISABLED - requests are identified by the X-User-Id header");
        }

        let media = MediaSettings {
            root: config.media_root()?,
            upload: UploadPathConfig {
                upload_dir: PathBuf::from(&config.media.upload_dir),
                filename_strategy: config.media.filename_strategy,
            },
            max_upload_bytes: config.media.max_upload_bytes,
        };

        Ok(Self {
            pool,
            graph,
            jwt_validator,
            token_issuer,
            media,
        })
    }

    /// Development state: auth disabled, default media layout under `media_root`
    pub fn unauthenticated(pool: SqlitePool, media_root: impl Into<PathBuf>) -> Self {
        Self {
            graph: FollowGraph::new(SqliteFollowStore::new(pool.clone())),
            pool,
            jwt_validator: None,
            token_issuer: None,
            media: MediaSettings::new(media_root),
        }
    }

    /// Enable bearer-token auth with an HS256 secret
    pub fn with_jwt_secret(mut self, secret: &[u8], ttl_secs: u64) -> Self {
        self.jwt_validator = Some(Arc::new(JwtValidator::with_hs256(secret)));
        self.token_issuer = Some(Arc::new(TokenIssuer::with_hs256(secret, ttl_secs)));
        self
    }
}
