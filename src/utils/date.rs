//! Date helpers: reset marker format and display format for timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Format of the persisted reset marker.
pub const MARKER_FORMAT: &str = "%Y-%m-%d";

/// Display format of time-in / time-out stamps, e.g. `3/7/2025, 2:05:09 PM`.
pub const STAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn marker_string(day: NaiveDate) -> String {
    day.format(MARKER_FORMAT).to_string()
}

pub fn parse_marker(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), MARKER_FORMAT).ok()
}

pub fn format_stamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(STAMP_FORMAT).to_string()
}

/// True when the text reads like a date/time value (ISO or stamp format).
pub fn looks_like_timestamp(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() {
        return false;
    }
    if DateTime::<FixedOffset>::parse_from_rfc3339(t).is_ok() {
        return true;
    }
    const FORMATS: [&str; 4] = [
        "%m/%d/%Y, %I:%M:%S %p",
        "%m/%d/%Y %I:%M:%S %p",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    FORMATS
        .iter()
        .any(|f| chrono::NaiveDateTime::parse_from_str(t, f).is_ok())
}
