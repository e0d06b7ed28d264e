//! Strict timestamp parsing for command-line input.
//!
//! # Supported Formats
//!
//! - **RFC 3339**: `"2024-03-10T12:00:00Z"`, `"2024-03-10T20:00:00+08:00"` (zone kept)
//! - **ISO dates**: `"2024-03-10"` (midnight UTC)
//! - **Unix milliseconds**: `"1710072000000"` (must be > 4 digits)
//!
//! Nothing else is accepted; this is not a natural-language date parser.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::errors::*;

pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();

    // RFC 3339 first (carries its own offset)
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }

    if let Some(dt) = try_parse_iso_date(input) {
        return Ok(dt);
    }

    // Unix milliseconds (must be > 4 digits so a bare year is not mistaken for one)
    if input.len() > 4 {
        if let Some(dt) = try_parse_unix_millis(input) {
            return Ok(dt);
        }
    }

    Err(Error::InvalidTimestamp(input.to_string()))
}

fn try_parse_iso_date(input: &str) -> Option<DateTime<FixedOffset>> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(midnight.fixed_offset())
}

fn try_parse_unix_millis(input: &str) -> Option<DateTime<FixedOffset>> {
    let ms: i64 = input.parse().ok()?;
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.fixed_offset())
}
