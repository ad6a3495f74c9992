use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub follower_id: String,
    pub followee_id: String,
    /// false when the edge already existed
    pub created: bool,
}
