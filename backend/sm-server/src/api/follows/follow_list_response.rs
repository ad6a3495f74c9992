use sm_core::PageRequest;

use serde::Serialize;
use uuid::Uuid;

/// One page of a following or followers view, oldest edge first
#[derive(Debug, Serialize)]
pub struct FollowListResponse {
    pub user_id: String,
    pub user_ids: Vec<String>,
    pub limit: u32,
    pub offset: u32,
}

impl FollowListResponse {
    pub fn new(user_id: Uuid, ids: Vec<Uuid>, page: PageRequest) -> Self {
        Self {
            user_id: user_id.to_string(),
            user_ids: ids.into_iter().map(|id| id.to_string()).collect(),
            limit: page.limit,
            offset: page.offset,
        }
    }
}
