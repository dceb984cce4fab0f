//! Calendar date normalization
//!
//! Date fields arrive in many textual shapes. Every accepted shape is listed
//! here and parsed to a single `NaiveDate`; anything else is `None`, which the
//! loaders treat as an absent value rather than a parse failure.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order
///
/// Slash and dash forms with the year last are month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Smallest year accepted from a `%Y` field
///
/// chrono's `%Y` also matches one to three digits, so "01/15/24" would read as
/// year 24 through `%m/%d/%Y`; such dates are rejected and the `%y` forms
/// apply instead.
const MIN_YEAR: i32 = 1000;

/// Date-time formats whose time component is dropped
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a textual date into a calendar date
///
/// Surrounding whitespace is trimmed first. Empty input and unrecognised
/// shapes return `None`.
///
/// # Examples
/// ```
/// # use utility_knowledge::app::models::dates::parse_calendar_date;
/// # use chrono::NaiveDate;
/// let expected = NaiveDate::from_ymd_opt(2023, 5, 17);
/// assert_eq!(parse_calendar_date(" 2023-05-17 "), expected);
/// assert_eq!(parse_calendar_date("05/17/2023"), expected);
/// assert_eq!(parse_calendar_date("2023-05-17T08:30:00Z"), expected);
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .filter(|date| date.year() >= MIN_YEAR)
        })
    {
        return Some(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDateTime::parse_from_str(value, format)
                .ok()
                .filter(|datetime| datetime.year() >= MIN_YEAR)
        })
    {
        return Some(datetime.date());
    }

    // RFC 3339 / ISO-8601 with an offset or trailing Z
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
