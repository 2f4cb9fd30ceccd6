//! changelog
//!
//! Release entry formatting and in-place changelog update.
//!
//! The changelog is a plain-text file containing at least one line that is
//! exactly a ``` fence; the block of entries lives right below the first
//! such fence, newest on top. This module builds the text block for one
//! release ([`entry`]) and splices it into the file ([`update`]). The
//! format of anything else in the file is not this tool's concern.

pub mod entry;
pub mod update;

pub use entry::Entry;
pub use update::{insert_entry, ChangelogError};
