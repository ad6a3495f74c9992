use sm_core::User;

use serde::Serialize;

/// Public view of an account. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub online: bool,
    pub is_staff: bool,
    pub date_joined: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            bio: u.bio,
            profile_image: u.profile_image,
            online: u.online,
            is_staff: u.is_staff,
            date_joined: u.date_joined.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
