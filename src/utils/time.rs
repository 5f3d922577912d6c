//! Time utilities: TCX timestamp codec and break offset/length parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Whole-second layout, also the only layout we ever write.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Fractional-second layout emitted by some devices.
pub const TIMESTAMP_FORMAT_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parse a UTC timestamp, trying the whole-second layout first and the
/// fractional one second.
pub fn parse_timestamp(text: &str) -> AppResult<DateTime<Utc>> {
    let t = text.trim();
    NaiveDateTime::parse_from_str(t, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(t, TIMESTAMP_FORMAT_FRACTIONAL))
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::InvalidTimestamp(text.to_string()))
}

/// Format an instant with the whole-second layout (sub-seconds are dropped).
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an offset from the activity start written as `H:M:S`.
pub fn parse_clock_offset(s: &str) -> AppResult<i64> {
    let parts = split_numbers(s)?;
    match parts.as_slice() {
        [h, m, sec] => Ok(h * 3600 + m * 60 + sec),
        _ => Err(AppError::InvalidBreak(format!(
            "'{}' is not in hours:minutes:seconds form",
            s
        ))),
    }
}

/// Parse a break length written as `M:S`.
pub fn parse_break_length(s: &str) -> AppResult<i64> {
    let parts = split_numbers(s)?;
    match parts.as_slice() {
        [m, sec] => Ok(m * 60 + sec),
        _ => Err(AppError::InvalidBreak(format!(
            "'{}' is not in minutes:seconds form",
            s
        ))),
    }
}

fn split_numbers(s: &str) -> AppResult<Vec<i64>> {
    s.trim()
        .split(':')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map(i64::from)
                .map_err(|_| AppError::InvalidBreak(format!("'{}' is not a number in '{}'", part, s)))
        })
        .collect()
}
