//! Request Field Validation
//!
//! Request bodies are deserialized into structs whose required fields are
//! `Option`s, so a missing field reaches the handler instead of failing inside
//! the JSON extractor. These helpers turn those options into concrete values
//! or a `SharedError::ValidationError` naming the field.

use crate::shared::error::SharedError;

/// Lowest accepted mood score
pub const MOOD_MIN: i32 = 1;
/// Highest accepted mood score
pub const MOOD_MAX: i32 = 10;

/// Require a non-blank string field, returning it trimmed
pub fn required_text(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(SharedError::validation(field, format!("{} is required", field))),
    }
}

/// Require a field of any type to be present
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, SharedError> {
    value.ok_or_else(|| SharedError::validation(field, format!("{} is required", field)))
}

/// Check an integer lies within `min..=max`
pub fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<i32, SharedError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SharedError::validation(
            field,
            format!("{} must be between {} and {}", field, min, max),
        ))
    }
}

/// Check an optional mood score, if present, lies on the mood scale
pub fn optional_mood(field: &str, value: Option<i32>) -> Result<Option<i32>, SharedError> {
    value
        .map(|mood| in_range(field, mood, MOOD_MIN, MOOD_MAX))
        .transpose()
}

/// Optional free text: blank strings collapse to `None`
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
