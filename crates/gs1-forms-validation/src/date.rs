//! Date validation functions
//!
//! Two levels of strictness:
//! - [`is_date_shape`] only looks at the `DD/MM/YYYY` digit layout. "31/02/2023"
//!   and "99/99/9999" pass. This is the rule the forms apply.
//! - [`parse_calendar_date`] and [`is_unexpired_date`] require a real calendar
//!   date and are used for expiry checks and GS1 date encoding.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono format matching the form's `DD/MM/YYYY` layout
pub const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap());

/// Validates the `DD/MM/YYYY` digit shape without any calendar check
pub fn is_date_shape(value: &str) -> bool {
    DATE_SHAPE_REGEX.is_match(value)
}

/// Parses a `DD/MM/YYYY` value into a calendar date
///
/// Returns `None` when the shape is wrong or the date does not exist
/// (day 32, month 13, 29/02 outside leap years).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if !is_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Validates that `value` is a real calendar date not earlier than `today`
pub fn is_unexpired_date(value: &str, today: NaiveDate) -> bool {
    parse_calendar_date(value).is_some_and(|date| date >= today)
}
