//! Postal code checker (`123-4567` or `1234567`)

use once_cell::sync::Lazy;
use regex::Regex;

static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{4}$").expect("postal code regex is valid"));

/// Validates a postal code, ignoring surrounding whitespace
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(postal_code.trim())
}
