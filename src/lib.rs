//! # Precheck - Argument Precondition Checks
//!
//! Small, stateless helpers to be called at the start of your own functions
//! to verify correct arguments before doing real work:
//! - Presence checks on optional references
//! - Non-negativity and positivity checks on integers
//! - Inclusive range checks on integers and floats, with NaN screening
//! - Non-empty checks on strings
//!
//! Every check hands the validated value back on success, so checks compose
//! with `?` at function entry:
//!
//! ```
//! use precheck::{require_int_in_range, require_non_null, Result};
//!
//! fn set_volume(level: Option<i32>) -> Result<i32> {
//!     let level = require_non_null(level)?;
//!     require_int_in_range(level, 0, 100, "level")
//! }
//!
//! assert_eq!(set_volume(Some(30)), Ok(30));
//! assert!(set_volume(Some(130)).is_err());
//! ```
//!
//! Failures are immediate and terminal to the calling operation: a check
//! either passes or returns one of the two [`Error`] kinds for the caller to
//! propagate. Nothing is retried, logged-and-swallowed, or recovered here.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod types;
pub mod validation;

pub use types::{Error, Result};
pub use validation::{
    require_finite, require_float_in_range, require_int_in_range, require_non_empty,
    require_non_negative, require_non_null, require_non_null_with, require_positive,
};
