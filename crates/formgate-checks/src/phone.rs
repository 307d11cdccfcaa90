//! National (domestic) phone number checker

use once_cell::sync::Lazy;
use regex::Regex;

// Formatted (`090-1234-5678`, `03 1234 5678`) or plain (`09012345678`).
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0[0-9]{1,4}[- ]?[0-9]{1,4}[- ]?[0-9]{4}$|^0[0-9]{9,10}$")
        .expect("phone regex is valid")
});

/// Validates a national phone number
///
/// Accepts the value as typed, or with every hyphen and whitespace character
/// removed. International (`+81`) formats are not accepted.
pub fn is_valid_phone(phone: &str) -> bool {
    if PHONE_REGEX.is_match(phone) {
        return true;
    }

    let cleaned: String = phone
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    PHONE_REGEX.is_match(&cleaned)
}
