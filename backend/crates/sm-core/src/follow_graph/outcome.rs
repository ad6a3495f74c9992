use serde::Serialize;

/// Result of a successful follow. Following twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowOutcome {
    Created,
    AlreadyFollowing,
}

impl FollowOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Result of a successful unfollow. Unfollowing twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnfollowOutcome {
    Removed,
    NotFollowing,
}

impl UnfollowOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}
