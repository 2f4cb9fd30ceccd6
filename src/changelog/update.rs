//! changelog::update
//!
//! In-place changelog update.
//!
//! The file is read as an ordered sequence of lines retaining terminators,
//! and the new entry is spliced in as a single element immediately after
//! the first line whose trimmed content is exactly a ``` fence. Only the
//! first fence counts: the topmost fence opens the current release block.
//!
//! Failures before the final write leave the file byte-for-byte unchanged.
//! A failure during the write itself is not specially guarded.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fence line that marks the start of the release block.
const FENCE: &str = "```";

/// Errors from the changelog update.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// No fence line exists in the file, so there is nowhere to insert.
    #[error("no '```' fence line found in {path}")]
    FenceNotFound {
        /// The changelog that was scanned
        path: PathBuf,
    },

    /// The file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        /// The changelog path
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Insert an entry into the changelog at `path`, immediately after the
/// first fence line, and rewrite the file in place.
pub fn insert_entry(path: &Path, entry: &str) -> Result<(), ChangelogError> {
    let content = fs::read_to_string(path).map_err(|source| ChangelogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let fence_index = lines
        .iter()
        .position(|line| line.trim() == FENCE)
        .ok_or_else(|| ChangelogError::FenceNotFound {
            path: path.to_path_buf(),
        })?;

    let mut updated = String::with_capacity(content.len() + entry.len());
    for (index, line) in lines.iter().enumerate() {
        updated.push_str(line);
        if index == fence_index {
            updated.push_str(entry);
        }
    }

    fs::write(path, updated).map_err(|source| ChangelogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
