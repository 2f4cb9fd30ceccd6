//! cli::commands
//!
//! Command handlers.
//!
//! Bumplog has exactly one operation, so there is no dispatch table: the
//! CLI layer calls [`bump`] directly.

mod bump;

pub use bump::bump;
