//! Error types
//!
//! Bad user input is never an error here: it is reported inside a
//! [`ValidationResult`](crate::ValidationResult). These types cover broken
//! rule configuration, unreadable input records, and callers that opt into
//! treating a failed validation as an error.

use thiserror::Error;

use crate::rule::RuleId;

/// A rule table or registry that cannot be dispatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rule name outside the known rule set
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    /// Known rule with no checker bound in the registry being used
    #[error("rule `{0}` has no checker bound in this registry")]
    UnboundRule(RuleId),

    /// The same field appears twice in one rule table definition
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    /// A rule table entry with an empty field name
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// An input record that could not be decoded
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// A failed validation, for callers that propagate it with `?`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct InvalidInput {
    pub messages: Vec<String>,
}
