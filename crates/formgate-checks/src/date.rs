//! Calendar date checker (`YYYY-MM-DD`)

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono format string matching the accepted literal shape
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date regex is valid"));

/// Validates a calendar date written as `YYYY-MM-DD`
///
/// The value must have the literal shape, name a real day (`2023-02-30` is
/// rejected) and format back to exactly the same string.
pub fn is_valid_date(date: &str) -> bool {
    if !DATE_SHAPE_REGEX.is_match(date) {
        return false;
    }

    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format(DATE_FORMAT).to_string() == date,
        Err(_) => false,
    }
}
