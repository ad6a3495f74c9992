pub mod email;
pub mod error;
pub mod follow_graph;
pub mod media;
pub mod models;
pub mod page;

#[cfg(test)]
mod tests;

pub use email::normalize_email;
pub use error::{CoreError, Result};
pub use error::Result as CoreResult;
pub use error_location::ErrorLocation;
pub use follow_graph::error::{GraphError, Result as GraphResult};
pub use follow_graph::graph::FollowGraph;
pub use follow_graph::memory_store::InMemoryFollowStore;
pub use follow_graph::outcome::{FollowOutcome, UnfollowOutcome};
pub use follow_graph::store::{FollowStore, FollowTransaction};
pub use media::filename_strategy::FilenameStrategy;
pub use media::slug::slugify;
pub use media::upload_path::{DEFAULT_USER_UPLOAD_DIR, UploadPathConfig, profile_image_path};
pub use models::comment::Comment;
pub use models::follow_edge::FollowEdge;
pub use models::like::Like;
pub use models::new_user::{MAX_USERNAME_LENGTH, NewUser, validate_username};
pub use models::post::Post;
pub use models::user::User;
pub use page::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, PageRequest};

use std::panic::Location;

use uuid::Uuid;

/// Parse a UUID string, tagging failures with the field they came from
#[track_caller]
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| CoreError::Validation {
        message: format!("Invalid UUID for {}: {}", field, value),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
