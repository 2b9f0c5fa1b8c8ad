//! Error types and result aliases for etabs.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! The pipeline has no validation errors: any text is accepted and split
//! into columns. The only failure modes are read and write errors, which
//! propagate with context attached. "No changes made" is not an error; it
//! is reported as [`crate::process::Outcome::Unchanged`].

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
