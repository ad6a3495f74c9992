use sm_core::Like;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LikeDto {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub created_at: i64,
}

impl From<Like> for LikeDto {
    fn from(l: Like) -> Self {
        Self {
            id: l.id.to_string(),
            post_id: l.post_id.to_string(),
            user_id: l.user_id.to_string(),
            created_at: l.created_at.timestamp(),
        }
    }
}
