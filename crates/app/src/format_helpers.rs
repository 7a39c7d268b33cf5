//! Display formatting for timestamps that arrive as RFC 3339 strings.

use chrono::{DateTime, FixedOffset};

fn parse(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}

/// `"2026-01-20T21:35:00Z"` becomes `"Jan 20, 2026"`.
///
/// The calendar date is the one written in the string, not converted to the
/// viewer's zone. Unparseable input falls back to its first ten characters.
pub fn format_date_human(timestamp: &str) -> String {
    match parse(timestamp) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => timestamp.chars().take(10).collect(),
    }
}

/// `"Jan 20, 2026 9:35 PM"`, used for chat and notification times.
pub fn format_datetime_human(timestamp: &str) -> String {
    match parse(timestamp) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => format_date_human(timestamp),
    }
}
