//! Bumplog - append a release entry to a changelog from git history
//!
//! Bumplog is a single-binary tool that reads recent commit subjects from
//! git and inserts a formatted release block into `CHANGELOG.md`, right
//! after the first code fence in the file.
//!
//! # Architecture
//!
//! The codebase follows a thin layered layout:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the handler)
//! - [`git`] - Single interface for all git operations
//! - [`changelog`] - Entry formatting and in-place file update
//! - [`ui`] - User-facing output utilities
//!
//! # Invariants
//!
//! 1. The entry is inserted exactly once, after the first fence line found
//!    scanning top-to-bottom
//! 2. No other region of the changelog is altered
//! 3. Any failure before the final write leaves the file untouched

pub mod changelog;
pub mod cli;
pub mod git;
pub mod ui;
