use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProfileImageQuery {
    /// Client-side file name; only its extension is kept
    pub filename: String,
}
