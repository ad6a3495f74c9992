use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListLikesQuery {
    pub post_id: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
