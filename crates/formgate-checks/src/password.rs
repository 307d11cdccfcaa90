//! Password strength checker

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates password strength
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters including one ASCII
/// lowercase letter, one ASCII uppercase letter and one ASCII digit. There is
/// no upper bound on length.
pub fn is_valid_password(password: &str) -> bool {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
    ];

    checks.iter().all(|passed| *passed)
}
