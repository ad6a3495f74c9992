use crate::{CoreError, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How uploaded files are renamed before they are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilenameStrategy {
    /// `{slug(username)}-{uuid4}{extension}`
    #[default]
    SlugWithRandomSuffix,
}

impl FilenameStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SlugWithRandomSuffix => "slug_with_random_suffix",
        }
    }
}

impl FromStr for FilenameStrategy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slug_with_random_suffix" => Ok(Self::SlugWithRandomSuffix),
            _ => Err(CoreError::InvalidFilenameStrategy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
