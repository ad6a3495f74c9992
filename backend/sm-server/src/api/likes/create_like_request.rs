use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLikeRequest {
    pub post_id: String,
}
