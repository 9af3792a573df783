//! Timestamp canonicalization.
//!
//! Input may be any common date/time representation: RFC 3339 / ISO 8601
//! (with or without offset), RFC 2822, and the usual locale layouts. Values
//! that carry an offset are converted to UTC; values without one are taken
//! as UTC already. Output is always `YYYY-MM-DDTHH:MM:SS.mmmZ`, with
//! sub-millisecond digits truncated.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TransformError;

/// Whole-second part of the canonical layout; milliseconds and `Z` follow.
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layouts carrying an explicit UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

// Numeric dates with the year last are read month-first before day-first,
// for both slash and dash separators.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S%.f %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %I:%M:%S%.f %p",
    "%Y/%m/%d %I:%M %p",
    "%Y%m%dT%H%M%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S%.f %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%m-%d-%Y %H:%M:%S%.f",
    "%m-%d-%Y %H:%M",
    "%m-%d-%Y %I:%M:%S%.f %p",
    "%m-%d-%Y %I:%M %p",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%d-%b-%Y %H:%M:%S%.f",
    "%d-%b-%Y %H:%M",
    "%d %b %Y %H:%M:%S%.f",
    "%d %b %Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
    "%b %d %Y %H:%M:%S%.f",
    "%b %d %Y %H:%M",
    "%b %d, %Y %H:%M:%S%.f",
    "%b %d, %Y %H:%M",
    "%b %d, %Y %I:%M:%S%.f %p",
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S%.f %p",
    "%B %d, %Y %I:%M %p",
    "%a %b %e %H:%M:%S%.f %Y",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Suffixes that label a naive value as UTC.
const UTC_SUFFIXES: &[&str] = &["Z", "z", " UTC", " GMT", " utc", " gmt"];

/// Parses a free-form date/time into a UTC wall-clock value.
///
/// Returns `None` for empty input and for anything no known layout accepts.
/// Partial values (year only, year-month) are rejected rather than completed
/// with a guessed day.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = normalize_layout(trimmed);
    let trimmed = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt.naive_utc());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.naive_utc());
    }

    let naive = UTC_SUFFIXES
        .iter()
        .find_map(|suffix| trimmed.strip_suffix(suffix))
        .map_or(trimmed, str::trim_end);
    try_parse_datetime(naive).or_else(|| try_parse_date(naive).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Rewrites ISO 8601 spellings chrono does not read: a comma before the
/// fraction of a second (`10:11:12,123`) and an hour-only offset (`+05`).
fn normalize_layout(value: &str) -> String {
    let mut normalized = value.to_string();
    let bytes = value.as_bytes();
    let fraction_comma = (3..bytes.len().saturating_sub(1)).find(|&i| {
        bytes[i] == b','
            && bytes[i - 3] == b':'
            && bytes[i - 2].is_ascii_digit()
            && bytes[i - 1].is_ascii_digit()
            && bytes[i + 1].is_ascii_digit()
    });
    if let Some(i) = fraction_comma {
        normalized.replace_range(i..=i, ".");
    }

    let bytes = normalized.as_bytes();
    let len = bytes.len();
    let hour_offset = len >= 4
        && matches!(bytes[len - 3], b'+' | b'-')
        && bytes[len - 2].is_ascii_digit()
        && bytes[len - 1].is_ascii_digit()
        && bytes[len - 4].is_ascii_digit()
        && normalized[..len - 3].contains(':');
    if hour_offset {
        normalized.push_str(":00");
    }
    normalized
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Formats a UTC value as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Milliseconds are truncated, never rounded: `.123999` becomes `.123`.
pub fn format_canonical_timestamp(dt: &NaiveDateTime) -> String {
    // A leap second is stored as nanosecond >= 1_000_000_000.
    let millis = (dt.nanosecond() % 1_000_000_000) / 1_000_000;
    format!("{}.{millis:03}Z", dt.format(CANONICAL_TIMESTAMP_FORMAT))
}

/// Parses `value` and renders it in canonical form.
pub fn canonicalize_timestamp(value: &str) -> Result<String, TransformError> {
    parse_timestamp(value)
        .map(|dt| format_canonical_timestamp(&dt))
        .ok_or_else(|| TransformError::Timestamp {
            value: value.to_string(),
        })
}
