//! Column decoding shared by the repositories.

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid_column(table: &str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::InvalidRow {
        table: table.to_string(),
        message: format!("bad UUID '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp_column(table: &str, value: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::InvalidRow {
        table: table.to_string(),
        message: format!("timestamp out of range: {}", value),
        location: ErrorLocation::from(Location::caller()),
    })
}
