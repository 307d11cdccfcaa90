//! JSON document checker

/// Validates that the value is a well-formed JSON document
pub fn is_valid_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}
