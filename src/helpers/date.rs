//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Write;

/// Marker produced for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Render a CMS publication timestamp as an ISO-8601 calendar date.
///
/// Offsets are normalized to UTC before the date is taken. Unparseable or
/// missing input yields [`INVALID_DATE`].
///
/// # Examples
/// ```ignore
/// iso_date(Some("2024-03-15T09:00:00Z")) // -> "2024-03-15"
/// ```
pub fn iso_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Parse a timestamp into its UTC calendar date
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc).date_naive());
    }

    // WordPress `date` has no offset
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a date using Moment.js-compatible format string.
///
/// Returns `None` when the format cannot be applied to a calendar date
/// (a stray `%`, or time and zone fields a date does not carry).
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY/MM/DD") // -> Some("2024/01/15")
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> Option<String> {
    let chrono_format = moment_to_chrono_format(format);
    let mut out = String::new();
    write!(out, "{}", date.format(&chrono_format)).ok()?;
    Some(out)
}

/// Whether `format` can render calendar dates
pub fn is_valid_date_format(format: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    format_date(&sample, format).is_some()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each unit
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
