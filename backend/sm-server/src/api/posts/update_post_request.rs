use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: String,
}
