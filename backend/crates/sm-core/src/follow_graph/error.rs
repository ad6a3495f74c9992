use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("User {user_id} cannot follow themselves {location}")]
    SelfFollow {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("User not found: {user_id} {location}")]
    NotFound {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Write conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Follow store error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl GraphError {
    /// Conflicts are the only failures that a retry can resolve.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub type Result<T> = StdResult<T, GraphError>;
