//! Parsing and rendering of the user-facing date formats.
//!
//! Activities are bucketed by the local calendar day on which they occurred,
//! so every accepted timestamp is resolved to a [`NaiveDate`] in local time.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// `%#z` accepts `+00:00`, `+0000` and `+00`; a trailing `Z` is rewritten to
/// `+00:00` before these are tried.
const ZONED_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%a %b %d %Y",
];

/// Parses a timestamp into local time.
///
/// Zoned input (RFC 3339, RFC 2822, ISO 8601 with a `Z`, `+hh:mm` or `+hhmm`
/// offset, seconds optional) is converted into the local zone; naive
/// input such as the `datetime-local` form value `2024-01-15T10:30` is taken
/// as already local, as are long-form dates like `January 15, 2024 10:30`.
/// A bare date resolves to local midnight.
pub fn parse_date_time(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(input) {
        return Some(zoned.with_timezone(&Local));
    }
    if let Ok(zoned) = DateTime::parse_from_rfc2822(input) {
        return Some(zoned.with_timezone(&Local));
    }
    if let Some(zoned) = parse_zoned(input) {
        return Some(zoned.with_timezone(&Local));
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| parse_bare_date(input).and_then(|d| d.and_hms_opt(0, 0, 0)))?;

    // DST gaps have no local instant; fall back to the earliest valid mapping.
    Some(
        Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    )
}

/// Resolves a query value (`2024-01-15` or any accepted timestamp) to a local
/// calendar day.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    parse_bare_date(input.trim()).or_else(|| parse_date_time(input).map(|dt| dt.date_naive()))
}

/// Renders a day as `Mon Jan 15 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_zoned(input: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match input.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(rest) => format!("{}+00:00", rest),
        None => input.to_string(),
    };
    ZONED_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
}

fn parse_bare_date(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}
