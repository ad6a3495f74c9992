use crate::ApiResult;

use sm_core::PageRequest;

use serde::Deserialize;

/// `?limit=&offset=` on list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PageQuery {
    #[track_caller]
    pub fn page(&self) -> ApiResult<PageRequest> {
        Ok(PageRequest::new(self.limit, self.offset)?)
    }
}
