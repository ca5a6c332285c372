//! Field-level validation helpers shared by round and order inputs.

use crate::error::CoreError;

/// Require a non-blank text field, returning it trimmed.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Require that an optional value is present.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Normalize an optional text field: blank strings become `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
