// File: src/validator.rs
// Purpose: Multi-field evaluation against a merged rule table

use std::borrow::Cow;

use formgate_checks::Checker;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::error::{ConfigError, InvalidInput};
use crate::message::{required_message, resolve_message};
use crate::record::InputRecord;
use crate::registry::RuleRegistry;
use crate::rule::FieldRule;
use crate::table::RuleTable;

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of one [`Validator::evaluate`] call
///
/// Validity is derived from the error list and cannot be set separately.
/// Serializes as `{"is_valid", "errors", "field_errors"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in field-processing order
    pub fn errors(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.message.as_str()).collect()
    }

    /// Errors tagged with the field they belong to
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error message for a specific field
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// `Err` carrying every message when validation failed
    pub fn ensure_valid(&self) -> Result<(), InvalidInput> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidInput {
                messages: self.errors().into_iter().map(str::to_string).collect(),
            })
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors())?;
        state.serialize_field("field_errors", &self.errors)?;
        state.end()
    }
}

/// Evaluates input records against a registry's default rules plus optional
/// per-call overrides
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
}

impl Validator<'static> {
    /// Validator over the process-wide built-in registry
    pub fn builtin() -> Self {
        Self::new(RuleRegistry::shared())
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Default rules with `overrides` applied
    pub fn effective_rules(&self, overrides: Option<&RuleTable>) -> Cow<'r, RuleTable> {
        match overrides {
            Some(overrides) => Cow::Owned(self.registry.default_rules().merged(overrides)),
            None => Cow::Borrowed(self.registry.default_rules()),
        }
    }

    /// Validate `record` against the default rules merged with `overrides`
    ///
    /// Every rule in the merged table is resolved before any value is looked
    /// at, so a configuration error never comes with partial results. Every
    /// field is then checked exactly once, in table order, and all failures
    /// are collected.
    pub fn evaluate(
        &self,
        record: &InputRecord,
        overrides: Option<&RuleTable>,
    ) -> Result<ValidationResult, ConfigError> {
        let rules = self.effective_rules(overrides);
        let plan = self.resolve_all(&rules)?;

        let mut errors = Vec::new();
        for (field, rule, checker) in plan {
            if let Some(error) = check_field(record, field, rule, checker) {
                errors.push(error);
            }
        }

        debug!(
            fields = rules.len(),
            errors = errors.len(),
            "validation finished"
        );

        Ok(ValidationResult { errors })
    }

    fn resolve_all<'t>(
        &self,
        rules: &'t RuleTable,
    ) -> Result<Vec<(&'t str, &'t FieldRule, Checker)>, ConfigError> {
        rules
            .iter()
            .map(|(field, rule)| {
                if field.is_empty() {
                    warn!("rule table contains an empty field name");
                    return Err(ConfigError::EmptyFieldName);
                }
                let checker = self.registry.resolve(rule.rule).map_err(|err| {
                    warn!(field, rule = %rule.rule, "cannot dispatch rule: {err}");
                    err
                })?;
                Ok((field, rule, checker))
            })
            .collect()
    }
}

fn check_field(
    record: &InputRecord,
    field: &str,
    rule: &FieldRule,
    checker: Checker,
) -> Option<FieldError> {
    match record.value(field) {
        None if rule.required => {
            debug!(field, "required field missing");
            let label = rule.display_label(field);
            Some(FieldError::new(field, required_message(&label)))
        }
        None => {
            trace!(field, "optional field empty, skipped");
            None
        }
        Some(value) if checker(value) => {
            trace!(field, rule = %rule.rule, "passed");
            None
        }
        Some(_) => {
            debug!(field, rule = %rule.rule, "failed");
            Some(FieldError::new(
                field,
                resolve_message(rule.rule, rule.message.as_deref()),
            ))
        }
    }
}
