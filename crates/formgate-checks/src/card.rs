//! Payment card number checker (Luhn checksum)

/// Shortest accepted card number, in digits
pub const MIN_CARD_DIGITS: usize = 13;
/// Longest accepted card number, in digits
pub const MAX_CARD_DIGITS: usize = 19;

/// Validates a payment card number
///
/// Every non-digit character (spaces, hyphens, anything else) is dropped
/// first. The remaining digit count must be within
/// [`MIN_CARD_DIGITS`]..=[`MAX_CARD_DIGITS`] and the digits must pass the
/// Luhn checksum. Issuer prefixes are not inspected.
pub fn is_valid_credit_card(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number.chars().filter_map(|c| c.to_digit(10)).collect();

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return false;
    }

    luhn_sum(&digits) % 10 == 0
}

/// Luhn sum, doubling every second digit counted from the right
fn luhn_sum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum()
}
