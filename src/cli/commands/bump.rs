//! bump - the single Bumplog operation
//!
//! Sequences the three steps: read commit subjects from git, build the
//! release entry, insert it into the changelog. Strictly linear; any
//! failure aborts the run before the file is rewritten.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::changelog::{self, Entry};
use crate::git::Git;

/// Relative path of the changelog this tool maintains.
const CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Append a release entry to the changelog.
///
/// # Arguments
///
/// * `version` - Version being released (leading 'v' stripped for display)
/// * `release_date` - Date string written into the entry header verbatim
/// * `previous_tag` - Lower bound for the commit range; `None` or empty
///   means every commit reachable from HEAD
pub fn bump(version: &str, release_date: &str, previous_tag: Option<&str>) -> Result<()> {
    let range = revision_range(previous_tag);

    let git = Git::new(std::env::current_dir().context("Failed to resolve current directory")?);
    let subjects = git
        .subjects(&range)
        .with_context(|| format!("Failed to read commit subjects for range '{}'", range))?;

    let entry = Entry::new(version, release_date, subjects);

    changelog::insert_entry(Path::new(CHANGELOG_PATH), &entry.render())
        .context("Failed to update changelog")?;

    Ok(())
}

/// Compute the revision range for the log read.
///
/// `<previous-tag>..HEAD` when a previous tag is supplied, otherwise
/// `HEAD` (all reachable commits, no lower bound). An explicit empty tag
/// behaves like an absent one.
fn revision_range(previous_tag: Option<&str>) -> String {
    match previous_tag {
        Some(tag) if !tag.is_empty() => format!("{}..HEAD", tag),
        _ => "HEAD".to_string(),
    }
}
