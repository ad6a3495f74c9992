use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UnfollowResponse {
    pub follower_id: String,
    pub followee_id: String,
    /// false when there was no edge to remove
    pub removed: bool,
}
