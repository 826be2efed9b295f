use crate::types::{ChangelogEntry, Fix, FixOp};
use chrono::Local;
use std::path::PathBuf;

pub const TARGET: &str = "CHANGELOG.md";

pub const PARENT_HEADING: &str = "## [Unreleased]";
pub const SECTION_HEADING: &str = "### Patch Scripts Run";
pub const CREATE_BEFORE: &str = "### Added";

pub fn fixes() -> Vec<Fix> {
    let today = Local::now().format("%Y-%m-%d");
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::AppendLog(ChangelogEntry {
            parent: PARENT_HEADING.to_string(),
            section: SECTION_HEADING.to_string(),
            create_before: CREATE_BEFORE.to_string(),
            entry: format!("- {}: maintenance patch scripts applied", today),
        }),
    }]
}
