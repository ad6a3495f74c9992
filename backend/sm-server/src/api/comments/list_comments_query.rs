use serde::Deserialize;

/// Query parameters for listing the comments of one post
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub post_id: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
