//! Core types for the precheck crate.
//!
//! - **Errors**: the two failure kinds with thiserror derives and a
//!   crate-wide `Result` alias

mod errors;

pub use errors::{Error, Result};
