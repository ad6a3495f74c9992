use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. `email` is the authentication key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    /// Path relative to the media root
    pub profile_image: Option<String>,
    pub online: bool,

    #[serde(skip_serializing, default)]
    pub password_hash: String,

    // Flags
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,

    // Audit
    pub date_joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
