use serde::Deserialize;

/// Body of both `POST /follows` and `POST /unfollows`
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub target_id: String,
}
