use crate::LikeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LikeListResponse {
    pub likes: Vec<LikeDto>,
}
