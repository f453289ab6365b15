//! Utility functions for request handling

use crate::error::{AppError, AppResult};

/// Parse a record identifier taken from a URL path segment.
///
/// Only positive integers are valid identifiers; anything else is rejected
/// with `InvalidId` before the store is touched.
///
/// ```
/// use warehouse_backend::utils::parse_record_id;
///
/// assert_eq!(parse_record_id("42").unwrap(), 42);
/// assert!(parse_record_id("abc").is_err());
/// ```
pub fn parse_record_id(raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidId(format!("Invalid ID format: {}", raw))),
    }
}

/// True when the string is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
