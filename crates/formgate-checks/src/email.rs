//! Email address checker

use once_cell::sync::Lazy;
use regex::Regex;

// Local part of unreserved/punctuation characters, then dot-separated domain
// labels (1-63 chars, hyphens only inside) and an alphabetic final label.
// Case folding stays ASCII-only so letters like U+212A never fold into `k`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.[a-z]{2,}$",
    )
    .expect("email regex is valid")
});

/// Validates email format
///
/// Surrounding whitespace is ignored; anything inside the address (including
/// line breaks) has to match the single-line pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}
