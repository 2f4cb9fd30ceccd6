//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! Bumplog is a single-operation tool: there are no subcommands, and no
//! flags beyond the three below. clap's built-in version flag is disabled
//! because `--version` carries the release version being recorded.

use clap::Parser;

/// Bumplog - append a release entry to CHANGELOG.md from git history
#[derive(Parser, Debug)]
#[command(name = "bumplog")]
#[command(author, about, long_about = None, disable_version_flag = true)]
#[command(after_help = "\
EXAMPLES:
    # Record everything since the last release tag
    bumplog --version v2.3.0 --release-date 2024-01-15 --previous-tag v2.2.0

    # No previous tag: record every reachable commit
    bumplog --version v0.1.0 --release-date 2024-01-15

The new entry is inserted into CHANGELOG.md immediately after the first
line consisting of a ``` fence. Running the tool twice inserts two
entries; it does not deduplicate.")]
pub struct Cli {
    /// Version being released; a single leading 'v' is stripped for display
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Release date string, written into the entry header verbatim
    #[arg(long, value_name = "DATE")]
    pub release_date: String,

    /// Previous release tag; when set, only commits in <tag>..HEAD are listed
    #[arg(long, value_name = "TAG")]
    pub previous_tag: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
