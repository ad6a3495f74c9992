use sm_core::Post;
use sm_db::PostStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PostDto {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PostDto {
    pub fn new(p: Post, stats: PostStats) -> Self {
        Self {
            id: p.id.to_string(),
            author_id: p.author_id.to_string(),
            content: p.content,
            like_count: stats.like_count,
            comment_count: stats.comment_count,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
