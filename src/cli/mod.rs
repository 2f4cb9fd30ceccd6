//! cli
//!
//! Command-line interface layer for Bumplog.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Delegate to the bump handler
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands::bump`], which sequences the git log read, the entry build,
//! and the changelog update.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    commands::bump(&cli.version, &cli.release_date, cli.previous_tag.as_deref())
}
