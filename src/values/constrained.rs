//! Helper functions for generating constrained types
//!
//! Each function is generic over a value constructor and an error
//! constructor, so every caller decides both the wrapper type and the
//! [`ValidationError`] variant a rejection maps to.

use super::error::ValidationError;

/// Creates a string-backed value, rejecting blank input.
///
/// The stored value keeps the input's exact spelling (no trimming).
///
/// # Errors
///
/// Returns the caller's error variant when the input is empty or contains
/// only whitespace.
pub(crate) fn create_exact<T, C, E>(constructor: C, error: E, value: &str) -> Result<T, ValidationError>
where
    C: FnOnce(String) -> T,
    E: FnOnce(String) -> ValidationError,
{
    if value.trim().is_empty() {
        Err(error("must be a non-empty string".to_string()))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates a string-backed value, rejecting blank input and storing the
/// trimmed form.
///
/// # Errors
///
/// Returns the caller's error variant when the input is empty or contains
/// only whitespace.
pub(crate) fn create_trimmed<T, C, E>(constructor: C, error: E, value: &str) -> Result<T, ValidationError>
where
    C: FnOnce(String) -> T,
    E: FnOnce(String) -> ValidationError,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error("must be a non-empty string".to_string()))
    } else {
        Ok(constructor(trimmed.to_string()))
    }
}

/// Creates an integer-backed value from a strictly positive input.
///
/// # Errors
///
/// Returns the caller's error variant when the input is less than 1 or does
/// not fit the stored width.
pub(crate) fn create_positive<T, C, E>(constructor: C, error: E, value: i64) -> Result<T, ValidationError>
where
    C: FnOnce(u32) -> T,
    E: FnOnce(String) -> ValidationError,
{
    if value < 1 {
        return Err(error("must be a positive integer".to_string()));
    }
    u32::try_from(value)
        .map(constructor)
        .map_err(|_| error(format!("must not exceed {}", u32::MAX)))
}

/// Creates an integer-backed value from a non-negative input.
///
/// # Errors
///
/// Returns the caller's error variant when the input is negative or does not
/// fit the stored width.
pub(crate) fn create_non_negative<T, C, E>(constructor: C, error: E, value: i64) -> Result<T, ValidationError>
where
    C: FnOnce(u32) -> T,
    E: FnOnce(String) -> ValidationError,
{
    if value < 0 {
        return Err(error("must be a non-negative integer".to_string()));
    }
    u32::try_from(value)
        .map(constructor)
        .map_err(|_| error(format!("must not exceed {}", u32::MAX)))
}
