//! git
//!
//! Git interface for Bumplog.
//!
//! This module is the single doorway to version control: no other module
//! spawns git directly. The tool needs exactly one capability from git -
//! "list non-merge commit subjects in a revision range" - so the interface
//! is a thin wrapper over `git log` with typed error categories.
//!
//! # Error Handling
//!
//! Failures are categorized into typed variants:
//! - [`GitError::Spawn`]: the git binary could not be started
//! - [`GitError::LogFailed`]: git exited with a non-zero status
//! - [`GitError::InvalidUtf8`]: git produced non-UTF-8 output
//!
//! All three are fatal to the run; there is no retry.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned.
    #[error("failed to run git: {source}")]
    Spawn {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// git exited with a non-zero status.
    #[error("git log exited with {status}: {stderr}")]
    LogFailed {
        /// The exit status, formatted for display
        status: String,
        /// Trimmed stderr text from git
        stderr: String,
    },

    /// git produced output that is not valid UTF-8.
    #[error("git log output is not valid UTF-8")]
    InvalidUtf8,
}

/// Handle to a git repository, identified by its working directory.
pub struct Git {
    cwd: PathBuf,
}

impl Git {
    /// Create a handle rooted at the given working directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// The working directory git commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// List non-merge commit subjects in a revision range.
    ///
    /// Spawns `git log --no-merges --pretty=format:%s <range>` and awaits
    /// completion. Subjects come back in git's default order (most recent
    /// first), whitespace-trimmed, with empty lines dropped.
    pub fn subjects(&self, range: &str) -> Result<Vec<String>, GitError> {
        let output = Command::new("git")
            .args(["log", "--no-merges", "--pretty=format:%s", range])
            .current_dir(&self.cwd)
            .output()?;

        if !output.status.success() {
            return Err(GitError::LogFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8)?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
