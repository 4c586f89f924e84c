//! Field-level validation of loosely-typed request payloads
//!
//! Request bodies arrive as untyped JSON. These helpers extract and check
//! one field at a time, reporting the caller-supplied message on failure so
//! every store can surface its own field-specific wording. Missing fields
//! are passed in as `Value::Null` and fail the same checks as wrong-typed
//! ones.

use serde_json::Value;

use crate::error::CoreError;

/// Extracts an integer field
///
/// Accepts JSON integers only; floating-point values, strings, and booleans
/// are rejected.
pub fn require_int(value: &Value, message: &str) -> Result<i64, CoreError> {
    value
        .as_i64()
        .ok_or_else(|| CoreError::validation(message))
}

/// Extracts a numeric field, integer or floating point
pub fn require_number(value: &Value, message: &str) -> Result<f64, CoreError> {
    value
        .as_f64()
        .ok_or_else(|| CoreError::validation(message))
}

/// Extracts a free-text string field
pub fn require_string(value: &Value, message: &str) -> Result<String, CoreError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CoreError::validation(message))
}

/// Extracts a purely-alphabetic string field
///
/// The value must be a non-empty string containing only alphabetic
/// characters: no digits, spaces, or punctuation.
pub fn require_alpha(value: &Value, message: &str) -> Result<String, CoreError> {
    let text = value
        .as_str()
        .ok_or_else(|| CoreError::validation(message))?;
    if is_alpha(text) {
        Ok(text.to_owned())
    } else {
        Err(CoreError::validation(message))
    }
}

/// Whether a string is non-empty and purely alphabetic
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}
