use chrono::{DateTime, Utc};

use crate::errors::CoreError;

/// Values below this are Unix seconds, anything else milliseconds.
pub const SECONDS_THRESHOLD: i64 = 10_000_000_000;

/// Parse a `now` query value into an instant.
///
/// Accepts a Unix timestamp in seconds or milliseconds, told apart by
/// magnitude (see [`SECONDS_THRESHOLD`]).
pub fn parse_reference_timestamp(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidTimestamp(format!("not an integer: {raw:?}")))?;

    let millis = if value < SECONDS_THRESHOLD {
        value
            .checked_mul(1000)
            .ok_or_else(|| CoreError::InvalidTimestamp(format!("out of range: {value}")))?
    } else {
        value
    };

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| CoreError::InvalidTimestamp(format!("out of range: {value}")))
}

/// Resolve the reference instant for a request: the parsed `now` value if
/// present and non-empty, otherwise `fallback`.
pub fn resolve_reference(
    raw: Option<&str>,
    fallback: DateTime<Utc>,
) -> Result<DateTime<Utc>, CoreError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => parse_reference_timestamp(value),
        _ => Ok(fallback),
    }
}
