//! Text body rules shared by posts and comments

use crate::{ApiError, ApiResult};

pub const MAX_CONTENT_LENGTH: usize = 5000;

/// Trim and check a post or comment body
#[track_caller]
pub fn validate_content(content: &str) -> ApiResult<String> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation("Content cannot be empty", "content"));
    }

    if trimmed.chars().count() > MAX_CONTENT_LENGTH {
        return Err(ApiError::validation(
            format!("Content must be at most {} characters", MAX_CONTENT_LENGTH),
            "content",
        ));
    }

    Ok(trimmed.to_string())
}
