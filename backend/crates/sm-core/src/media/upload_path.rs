use crate::{FilenameStrategy, slugify};

use std::path::{Path, PathBuf};

use uuid::Uuid;

pub const DEFAULT_USER_UPLOAD_DIR: &str = "upload/users";

/// Where profile images go and how they are named.
/// `upload_dir` is relative to the media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPathConfig {
    pub upload_dir: PathBuf,
    pub filename_strategy: FilenameStrategy,
}

impl Default for UploadPathConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_USER_UPLOAD_DIR),
            filename_strategy: FilenameStrategy::default(),
        }
    }
}

/// Resolve the storage path for a user's uploaded profile image.
///
/// Only the extension of `filename` survives; the rest of the name is
/// replaced so uploads never collide and never carry user-chosen paths.
pub fn profile_image_path(
    config: &UploadPathConfig,
    username: Option<&str>,
    filename: &str,
) -> PathBuf {
    match config.filename_strategy {
        FilenameStrategy::SlugWithRandomSuffix => {
            // Accounts without a username use the literal stem "none"
            let stem = username.map(slugify).unwrap_or_else(|| "none".to_string());
            let name = format!("{}-{}{}", stem, Uuid::new_v4(), extension_suffix(filename));
            config.upload_dir.join(name)
        }
    }
}

/// `".png"` for `"me.png"`, `""` for `"README"` or `".bashrc"`
fn extension_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}
