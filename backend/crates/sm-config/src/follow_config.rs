use crate::DEFAULT_RETRY_ON_CONFLICT;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// Retry a follow/unfollow once when the store reports a write conflict
    pub retry_on_conflict: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            retry_on_conflict: DEFAULT_RETRY_ON_CONFLICT,
        }
    }
}
