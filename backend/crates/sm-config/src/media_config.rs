use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MEDIA_ROOT,
    DEFAULT_UPLOAD_DIR, MAX_MAX_UPLOAD_BYTES, MIN_MAX_UPLOAD_BYTES, is_contained_relative_path,
};

use sm_core::FilenameStrategy;

use serde::Deserialize;

/// Where uploaded files live on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Relative to the config directory
    pub root: String,
    /// Profile images, relative to `root`
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    /// How uploaded files are renamed, e.g. `slug_with_random_suffix`
    pub filename_strategy: FilenameStrategy,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: String::from(DEFAULT_MEDIA_ROOT),
            upload_dir: String::from(DEFAULT_UPLOAD_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            filename_strategy: FilenameStrategy::default(),
        }
    }
}

impl MediaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [("media.root", &self.root), ("media.upload_dir", &self.upload_dir)] {
            if !is_contained_relative_path(value) {
                return Err(ConfigError::media(format!(
                    "{} must be a non-empty relative path without '..' components",
                    name
                )));
            }
        }

        if self.max_upload_bytes < MIN_MAX_UPLOAD_BYTES
            || self.max_upload_bytes > MAX_MAX_UPLOAD_BYTES
        {
            return Err(ConfigError::media(format!(
                "media.max_upload_bytes must be {}-{}, got {}",
                MIN_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}
