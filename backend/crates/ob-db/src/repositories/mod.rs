pub mod ingredient_repository;
pub mod order_repository;
pub mod restaurant_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert a stored unix-seconds column back into a UTC timestamp
#[track_caller]
pub(crate) fn from_unix(
    table: &'static str,
    column: &str,
    seconds: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::CorruptRow {
        table,
        message: format!("Invalid timestamp in {}.{}: {}", table, column, seconds),
        location: ErrorLocation::from(Location::caller()),
    })
}
