//! Date parsing and formatting for date literals.
//!
//! Dates are exchanged as quoted text. Three input layouts are accepted, all
//! interpreted in UTC unless an explicit offset is present; output always uses
//! [`FULL_FORMAT`]. A layout only has to match a prefix of the text, so
//! `2024-01-31T08:15:00Z` and `2024-01-31 08:15:00.5` read as their leading date
//! and time.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Full timestamp layout with milliseconds and a `+0000` style offset.
pub const FULL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Parse layout matching [`FULL_FORMAT`] (any fraction length).
const ZONED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Local date/time layouts, read as UTC.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse the leading date in `text` with any of the accepted layouts.
/// Whatever follows the matched layout is ignored.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok((dt, _)) = DateTime::parse_and_remainder(text, ZONED_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_and_remainder(text, layout).ok())
        .map(|(naive, _)| naive.and_utc())
}

/// Whether `text` is a date in one of the accepted layouts.
pub fn is_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Render `date` in [`FULL_FORMAT`].
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(FULL_FORMAT).to_string()
}
