//! changelog::entry
//!
//! Builds the text block for one release entry.
//!
//! The block has a fixed shape:
//!
//! ```text
//! 2.3.0 2024-01-15
//! [Patch]
//!     * Fix feature A
//!     * Add feature A
//!
//! ```
//!
//! Subjects are passed through verbatim; there is no escaping.

/// Bullet prefix for each commit subject line.
const BULLET: &str = "    * ";

/// Bullet text used when the commit range is empty.
const PLACEHOLDER_SUBJECT: &str = "Automated release";

/// One release entry, ready to be rendered into the changelog.
#[derive(Debug, Clone)]
pub struct Entry {
    version: String,
    release_date: String,
    subjects: Vec<String>,
}

impl Entry {
    /// Create an entry.
    ///
    /// A single leading `v` is stripped from the version for display;
    /// there is no further validation of either the version or the date.
    pub fn new(version: &str, release_date: &str, subjects: Vec<String>) -> Self {
        let version = version.strip_prefix('v').unwrap_or(version);
        Self {
            version: version.to_string(),
            release_date: release_date.to_string(),
            subjects,
        }
    }

    /// Render the entry as a text block ending in one blank line.
    pub fn render(&self) -> String {
        let mut block = format!("{} {}\n[Patch]\n", self.version, self.release_date);

        if self.subjects.is_empty() {
            block.push_str(BULLET);
            block.push_str(PLACEHOLDER_SUBJECT);
            block.push('\n');
        } else {
            for subject in &self.subjects {
                block.push_str(BULLET);
                block.push_str(subject);
                block.push('\n');
            }
        }

        block.push('\n');
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bullet_per_subject_in_order() {
        let entry = Entry::new(
            "1.2.3",
            "2024-06-01",
            vec!["Fix the thing".to_string(), "Add the thing".to_string()],
        );
        let block = entry.render();

        let bullets: Vec<&str> = block.lines().filter(|l| l.starts_with("    * ")).collect();
        assert_eq!(bullets, vec!["    * Fix the thing", "    * Add the thing"]);
    }

    #[test]
    fn empty_subject_list_gets_placeholder_bullet() {
        let block = Entry::new("1.0.0", "2024-06-01", vec![]).render();

        let bullets: Vec<&str> = block.lines().filter(|l| l.starts_with("    * ")).collect();
        assert_eq!(bullets, vec!["    * Automated release"]);
    }

    #[test]
    fn header_strips_leading_v() {
        let block = Entry::new("v2.3.0", "2024-01-15", vec![]).render();

        let mut lines = block.lines();
        assert_eq!(lines.next(), Some("2.3.0 2024-01-15"));
        assert_eq!(lines.next(), Some("[Patch]"));
    }

    #[test]
    fn only_one_leading_v_is_stripped() {
        let block = Entry::new("vv1.0.0", "2024-01-15", vec![]).render();
        assert!(block.starts_with("v1.0.0 2024-01-15\n"));
    }

    #[test]
    fn version_without_v_is_unchanged() {
        let block = Entry::new("2.3.0", "2024-01-15", vec![]).render();
        assert!(block.starts_with("2.3.0 2024-01-15\n"));
    }

    #[test]
    fn block_ends_with_one_blank_line() {
        let block = Entry::new("1.0.0", "2024-06-01", vec!["A change".to_string()]).render();
        assert!(block.ends_with("A change\n\n"));
        assert!(!block.ends_with("\n\n\n"));
    }

    #[test]
    fn subjects_are_passed_through_verbatim() {
        let entry = Entry::new(
            "1.0.0",
            "2024-06-01",
            vec!["Handle `*` and [brackets] & <angles>".to_string()],
        );
        assert!(entry
            .render()
            .contains("    * Handle `*` and [brackets] & <angles>\n"));
    }
}
