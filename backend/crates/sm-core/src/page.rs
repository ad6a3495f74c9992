use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 200;

/// Offset pagination window shared by every list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    #[track_caller]
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Result<Self> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(CoreError::Validation {
                message: format!("limit must be 1-{}, got {}", MAX_PAGE_LIMIT, limit),
                field: Some("limit".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    /// The window immediately after this one
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}
