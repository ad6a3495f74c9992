//! Registration input and its invariants.
//!
//! `NewUser` is the only way to build a [`User`]: it normalizes the email,
//! applies the flag defaults for regular accounts and superusers, and
//! rejects inconsistent combinations before anything is persisted.

use crate::{CoreError, ErrorLocation, Result, User, normalize_email};

use std::panic::Location;

use chrono::Utc;
use email_address::EmailAddress;
use uuid::Uuid;

pub const MAX_USERNAME_LENGTH: usize = 63;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
    superuser_requested: bool,
}

impl NewUser {
    pub fn regular(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: normalize_email(&email.into()),
            password: password.into(),
            username: None,
            first_name: String::new(),
            last_name: String::new(),
            bio: None,
            is_staff: false,
            is_superuser: false,
            superuser_requested: false,
        }
    }

    pub fn superuser(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            is_staff: true,
            is_superuser: true,
            superuser_requested: true,
            ..Self::regular(email, password)
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn is_superuser_requested(&self) -> bool {
        self.superuser_requested
    }

    #[track_caller]
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(CoreError::Validation {
                message: "The given email must be set".to_string(),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !EmailAddress::is_valid(&self.email) {
            return Err(CoreError::Validation {
                message: format!("Invalid email address: {}", self.email),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.password.is_empty() {
            return Err(CoreError::Validation {
                message: "Password cannot be empty".to_string(),
                field: Some("password".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref username) = self.username {
            validate_username(username)?;
        }

        if self.superuser_requested {
            if !self.is_staff {
                return Err(CoreError::Validation {
                    message: "Superuser must have is_staff=True.".to_string(),
                    field: Some("is_staff".into()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !self.is_superuser {
                return Err(CoreError::Validation {
                    message: "Superuser must have is_superuser=True.".to_string(),
                    field: Some("is_superuser".into()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Build the persisted entity. The password must already be hashed.
    pub fn into_user(self, password_hash: String) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_image: None,
            online: false,
            password_hash,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            is_active: true,
            date_joined: now,
            updated_at: now,
        }
    }
}

#[track_caller]
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "Username cannot be blank".to_string(),
            field: Some("username".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation {
            message: format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            ),
            field: Some("username".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
