use crate::types::{ChangelogEntry, PatchError};
use log::debug;
use regex::Regex;

// Never checks for duplicate bullets: every call adds a line.
pub fn append_entry(content: &str, entry: &ChangelogEntry) -> Result<String, PatchError> {
    let heading_re = Regex::new(r"^(#{1,6})\s").unwrap();

    let mut lines: Vec<String> = content
        .split_inclusive('\n')
        .map(|s| s.to_string())
        .collect();

    if let Some(section_idx) = find_line(&lines, 0, &entry.section) {
        let section_level = heading_level(&heading_re, &entry.section).unwrap_or(6);
        let boundary = lines[section_idx + 1..]
            .iter()
            .position(|l| matches!(heading_level(&heading_re, l), Some(lvl) if lvl <= section_level))
            .map(|k| section_idx + 1 + k)
            .or_else(|| find_line(&lines, section_idx + 1, &entry.create_before))
            .unwrap_or(lines.len());

        let mut at = boundary;
        while at > section_idx + 1 && lines[at - 1].trim().is_empty() {
            at -= 1;
        }
        debug!("appending under {:?} at line {}", entry.section, at);

        ensure_newline_before(&mut lines, at);
        lines.insert(at, format!("{}\n", entry.entry));
    } else {
        let parent_idx = find_line(&lines, 0, &entry.parent)
            .ok_or_else(|| PatchError::HeadingNotFound(entry.parent.clone()))?;

        let block = [
            format!("{}\n", entry.section),
            format!("{}\n", entry.entry),
            "\n".to_string(),
        ];

        if let Some(anchor_idx) = find_line(&lines, parent_idx + 1, &entry.create_before) {
            debug!(
                "creating section {:?} before {:?} at line {}",
                entry.section, entry.create_before, anchor_idx
            );
            for (i, line) in block.into_iter().enumerate() {
                lines.insert(anchor_idx + i, line);
            }
        } else {
            let mut at = parent_idx + 1;
            if at < lines.len() && lines[at].trim().is_empty() {
                at += 1;
            }
            debug!("creating section {:?} under parent at line {}", entry.section, at);

            ensure_newline_before(&mut lines, at);
            if at == lines.len() {
                // nothing follows, no separator line needed
                lines.push(block[0].clone());
                lines.push(block[1].clone());
            } else {
                for (i, line) in block.into_iter().enumerate() {
                    lines.insert(at + i, line);
                }
            }
        }
    }

    Ok(lines.concat())
}

pub fn has_heading(content: &str, heading: &str) -> bool {
    content.lines().any(|l| l.trim() == heading)
}

fn find_line(lines: &[String], from: usize, needle: &str) -> Option<usize> {
    lines[from..]
        .iter()
        .position(|l| l.trim() == needle)
        .map(|k| from + k)
}

fn heading_level(re: &Regex, line: &str) -> Option<usize> {
    re.captures(line.trim()).map(|caps| caps[1].len())
}

fn ensure_newline_before(lines: &mut [String], at: usize) {
    if at > 0 {
        if let Some(prev) = lines.get_mut(at - 1) {
            if !prev.ends_with('\n') {
                prev.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_log_entry(text: &str) -> ChangelogEntry {
        ChangelogEntry {
            parent: "## [Unreleased]".to_string(),
            section: "### Patch Scripts Run".to_string(),
            create_before: "### Added".to_string(),
            entry: text.to_string(),
        }
    }

    const CHANGELOG: &str = "# Changelog\n\n## [Unreleased]\n\n### Added\n- room chat\n";

    #[test]
    fn test_first_run_creates_section_before_added() {
        let entry = run_log_entry("- 2026-08-25: applied `debug-route`");
        let out = append_entry(CHANGELOG, &entry).unwrap();
        assert_eq!(
            out,
            "# Changelog\n\n## [Unreleased]\n\n\
             ### Patch Scripts Run\n- 2026-08-25: applied `debug-route`\n\n\
             ### Added\n- room chat\n"
        );
    }

    #[test]
    fn test_second_run_appends_without_duplicate_heading() {
        let first = append_entry(CHANGELOG, &run_log_entry("- 2026-08-25: applied `debug-route`")).unwrap();
        let second =
            append_entry(&first, &run_log_entry("- 2026-08-26: applied `socket-errors`")).unwrap();

        assert_eq!(second.matches("### Patch Scripts Run").count(), 1);
        assert_eq!(
            second,
            "# Changelog\n\n## [Unreleased]\n\n\
             ### Patch Scripts Run\n\
             - 2026-08-25: applied `debug-route`\n\
             - 2026-08-26: applied `socket-errors`\n\n\
             ### Added\n- room chat\n"
        );
    }

    #[test]
    fn test_missing_parent_heading_fails() {
        let err = append_entry("# Changelog\n", &run_log_entry("- x")).unwrap_err();
        assert!(matches!(err, PatchError::HeadingNotFound(_)));
    }

    #[test]
    fn test_section_at_end_of_file() {
        let content = "## [Unreleased]\n\n### Patch Scripts Run\n- old\n";
        let out = append_entry(content, &run_log_entry("- new")).unwrap();
        assert_eq!(out, "## [Unreleased]\n\n### Patch Scripts Run\n- old\n- new\n");
    }

    #[test]
    fn test_creation_without_fallback_heading() {
        let content = "# Changelog\n\n## [Unreleased]\n\n## [0.1.0]\n- shipped\n";
        let out = append_entry(content, &run_log_entry("- x")).unwrap();
        assert_eq!(
            out,
            "# Changelog\n\n## [Unreleased]\n\n\
             ### Patch Scripts Run\n- x\n\n\
             ## [0.1.0]\n- shipped\n"
        );
    }

    #[test]
    fn test_no_trailing_newline_at_eof() {
        let content = "## [Unreleased]\n\n### Patch Scripts Run\n- old";
        let out = append_entry(content, &run_log_entry("- new")).unwrap();
        assert_eq!(out, "## [Unreleased]\n\n### Patch Scripts Run\n- old\n- new\n");
    }

    #[test]
    fn test_has_heading() {
        assert!(has_heading(CHANGELOG, "## [Unreleased]"));
        assert!(!has_heading(CHANGELOG, "### Patch Scripts Run"));
    }
}
