//! Argument validation helpers.
//!
//! Free functions wrapping a comparison and a conditional failure. Each check
//! returns the validated value unchanged on success, so calls chain with `?`
//! at function entry.

use std::fmt;

use tracing::trace;

use crate::types::{Error, Result};

/// Message carried by [`require_non_null`] when the caller supplies none.
const NULL_REFERENCE_MESSAGE: &str = "required reference was null";

/// Ensure that an optional reference passed to the calling function is
/// present.
///
/// Returns the contained value.
pub fn require_non_null<T>(value: Option<T>) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            trace!("precondition failed: null reference");
            Err(Error::null_reference(NULL_REFERENCE_MESSAGE))
        }
    }
}

/// Ensure that an optional reference is present, with a caller-supplied
/// diagnostic.
///
/// `message` may be any displayable value; it is rendered to text only when
/// the check fails.
pub fn require_non_null_with<T>(value: Option<T>, message: impl fmt::Display) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            let message = message.to_string();
            trace!(%message, "precondition failed: null reference");
            Err(Error::null_reference(message))
        }
    }
}

/// Ensure that an integer argument is non-negative.
///
/// The error carries `message` verbatim.
pub fn require_non_negative(value: i32, message: &str) -> Result<i32> {
    if value < 0 {
        trace!(value, "precondition failed: negative argument");
        return Err(Error::invalid_argument(message));
    }
    Ok(value)
}

/// Ensure that an integer argument is strictly positive.
///
/// The error carries `message` verbatim.
pub fn require_positive(value: i32, message: &str) -> Result<i32> {
    if value <= 0 {
        trace!(value, "precondition failed: non-positive argument");
        return Err(Error::invalid_argument(message));
    }
    Ok(value)
}

/// Ensure that a floating point argument is within the inclusive range
/// `[lower, upper]`.
///
/// The range may extend to positive or negative infinity, but NaN values are
/// always out of range. Diagnostics render the bounds with six fractional
/// digits, independent of locale.
pub fn require_float_in_range(value: f32, lower: f32, upper: f32, name: &str) -> Result<f32> {
    if value.is_nan() {
        trace!(name, "precondition failed: NaN argument");
        return Err(Error::invalid_argument(format!("{name} must not be NaN")));
    }
    if value < lower {
        trace!(name, %value, "precondition failed: below range");
        return Err(Error::invalid_argument(format!(
            "{name} is out of range of [{lower:.6}, {upper:.6}] (too low)"
        )));
    }
    if value > upper {
        trace!(name, %value, "precondition failed: above range");
        return Err(Error::invalid_argument(format!(
            "{name} is out of range of [{lower:.6}, {upper:.6}] (too high)"
        )));
    }
    Ok(value)
}

/// Ensure that an integer argument is within the inclusive range
/// `[lower, upper]`.
pub fn require_int_in_range(value: i32, lower: i32, upper: i32, name: &str) -> Result<i32> {
    if value < lower {
        trace!(name, value, "precondition failed: below range");
        return Err(Error::invalid_argument(format!(
            "{name} is out of range of [{lower}, {upper}] (too low)"
        )));
    }
    if value > upper {
        trace!(name, value, "precondition failed: above range");
        return Err(Error::invalid_argument(format!(
            "{name} is out of range of [{lower}, {upper}] (too high)"
        )));
    }
    Ok(value)
}

/// Ensure that a floating point argument is a finite number.
///
/// Rejects NaN as well as positive and negative infinity.
pub fn require_finite(value: f32, name: &str) -> Result<f32> {
    if !value.is_finite() {
        trace!(name, %value, "precondition failed: non-finite argument");
        return Err(Error::invalid_argument(format!(
            "{name} must be a finite number"
        )));
    }
    Ok(value)
}

/// Ensure that a string argument is not empty.
pub fn require_non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.is_empty() {
        trace!(name, "precondition failed: empty string");
        return Err(Error::invalid_argument(format!("{name} cannot be empty")));
    }
    Ok(value)
}
