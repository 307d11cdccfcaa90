// File: src/message.rs
// Purpose: Error message templates

use crate::rule::RuleId;

/// Default failure message for a rule
pub fn default_message(rule: RuleId) -> &'static str {
    match rule {
        RuleId::Email => "Please enter a valid email address (e.g. user@example.com)",
        RuleId::Phone => "Phone number format is invalid (e.g. 090-1234-5678 or 09012345678)",
        RuleId::Password => {
            "Password must be at least 8 characters and contain an uppercase letter, a lowercase letter, and a digit (e.g. MyPass123)"
        }
        RuleId::Date => "Date must be in YYYY-MM-DD format (e.g. 2000-01-31)",
        RuleId::PostalCode => "Postal code must be in 123-4567 or 1234567 format",
        RuleId::CreditCard => "Card number is invalid (e.g. 4111 1111 1111 1111)",
        RuleId::Json => r#"Value must be well-formed JSON (e.g. {"key": "value"})"#,
    }
}

/// Failure message for a field: `explicit` if non-empty, else the rule default
pub fn resolve_message(rule: RuleId, explicit: Option<&str>) -> String {
    match explicit {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => default_message(rule).to_string(),
    }
}

/// Message for a required field with no value
pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}
