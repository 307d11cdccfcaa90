// File: src/record.rs
// Purpose: Raw submitted form values

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::RecordError;

/// Raw values of one form submission, keyed by field name
///
/// A field can be missing, explicitly null (`None`), or carry a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    values: BTreeMap<String, Option<String>>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), Some(value.into()));
    }

    /// Record `field` as explicitly null
    pub fn insert_null(&mut self, field: impl Into<String>) {
        self.values.insert(field.into(), None);
    }

    /// Raw value as submitted; `None` when missing or null
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|value| value.as_deref())
    }

    /// Value if the field counts as filled in
    ///
    /// Missing, null and empty values count as "no value". `"0"` is a value.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode a record from a JSON object
    ///
    /// Strings are kept as-is and `null` is an explicit null. Numbers,
    /// booleans, arrays and objects keep their JSON text, so `0` becomes
    /// `"0"`.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, RecordError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Err(RecordError::NotAnObject("null")),
            Value::Bool(_) => return Err(RecordError::NotAnObject("a boolean")),
            Value::Number(_) => return Err(RecordError::NotAnObject("a number")),
            Value::String(_) => return Err(RecordError::NotAnObject("a string")),
            Value::Array(_) => return Err(RecordError::NotAnObject("an array")),
        };

        let values = object
            .into_iter()
            .map(|(field, value)| {
                let raw = match value {
                    Value::Null => None,
                    Value::String(text) => Some(text),
                    other => Some(other.to_string()),
                };
                (field, raw)
            })
            .collect();

        Ok(Self { values })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = InputRecord::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}
