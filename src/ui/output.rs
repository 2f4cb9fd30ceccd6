//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! A successful run is silent: the mutated changelog is the output.
//! Failures go to stderr with an `error:` prefix and the full context
//! chain, so a CI log shows exactly which step gave up.

use std::fmt::Display;

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
