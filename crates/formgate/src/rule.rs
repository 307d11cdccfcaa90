// File: src/rule.rs
// Purpose: Rule identifiers and per-field rule definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Built-in validation rules
///
/// Each rule is bound to exactly one checker by the
/// [`RuleRegistry`](crate::RuleRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    Email,
    Phone,
    Password,
    Date,
    #[serde(alias = "postal_code")]
    PostalCode,
    #[serde(alias = "credit_card")]
    CreditCard,
    Json,
}

impl RuleId {
    /// Every rule, in declaration order
    pub const ALL: [RuleId; 7] = [
        RuleId::Email,
        RuleId::Phone,
        RuleId::Password,
        RuleId::Date,
        RuleId::PostalCode,
        RuleId::CreditCard,
        RuleId::Json,
    ];

    /// Canonical (camelCase) rule name
    pub fn name(self) -> &'static str {
        match self {
            RuleId::Email => "email",
            RuleId::Phone => "phone",
            RuleId::Password => "password",
            RuleId::Date => "date",
            RuleId::PostalCode => "postalCode",
            RuleId::CreditCard => "creditCard",
            RuleId::Json => "json",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleId {
    type Err = ConfigError;

    /// Parse a rule name; accepts camelCase and snake_case spellings
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "email" => Ok(RuleId::Email),
            "phone" => Ok(RuleId::Phone),
            "password" => Ok(RuleId::Password),
            "date" => Ok(RuleId::Date),
            "postalCode" | "postal_code" => Ok(RuleId::PostalCode),
            "creditCard" | "credit_card" => Ok(RuleId::CreditCard),
            "json" => Ok(RuleId::Json),
            other => Err(ConfigError::UnknownRule(other.to_string())),
        }
    }
}

/// How one field is validated
///
/// Overrides always replace a whole `FieldRule`; copy `message` and `label`
/// forward explicitly if they should survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub required: bool,
    pub rule: RuleId,

    /// Replaces the rule's default failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Name used in "is required" messages instead of the derived one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldRule {
    /// A field that must be present
    pub fn required(rule: RuleId) -> Self {
        Self {
            required: true,
            rule,
            message: None,
            label: None,
        }
    }

    /// A field that is only checked when present
    pub fn optional(rule: RuleId) -> Self {
        Self {
            required: false,
            ..Self::required(rule)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label shown for `field`: the explicit label, or one derived from the
    /// field name
    pub fn display_label(&self, field: &str) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => derive_label(field),
        }
    }
}

/// Turn a field name into a human-readable label
///
/// Separators (`_`, `-`, `.`, whitespace) and lower-to-upper case boundaries
/// start a new word; every word gets an uppercase first letter.
///
/// # Examples
/// ```
/// use formgate::rule::derive_label;
/// assert_eq!(derive_label("birth_date"), "Birth Date");
/// assert_eq!(derive_label("postalCode"), "Postal Code");
/// assert_eq!(derive_label("email"), "Email");
/// ```
pub fn derive_label(field: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in field.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
