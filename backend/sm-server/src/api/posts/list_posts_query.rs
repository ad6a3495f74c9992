use crate::{ApiResult, PageQuery};

use sm_core::PageRequest;

use serde::Deserialize;

/// Query parameters for listing posts, newest first
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    /// Only posts written by this user
    pub author_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListPostsQuery {
    pub fn page(&self) -> ApiResult<PageRequest> {
        PageQuery {
            limit: self.limit,
            offset: self.offset,
        }
        .page()
    }
}
