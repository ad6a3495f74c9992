use crate::LikeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub like: LikeDto,
    /// false when the caller had already liked the post
    pub created: bool,
}
