use crate::changelog;
use crate::splice;
use crate::types::{Fix, FixOp, FixReport, FixStatus, PatchError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// The full new content is assembled in memory before anything is written, so
// a failed anchor or heading lookup leaves the target byte-for-byte intact.
pub fn apply_fix(root: &Path, fix: &Fix, dry_run: bool) -> Result<FixReport> {
    let path = root.join(&fix.rel_path);
    println!("--- Applying fix to: {:?}", fix.rel_path);

    if !path.exists() {
        return Err(PatchError::TargetMissing(path).into());
    }

    match &fix.op {
        FixOp::Splice(patches) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("could not read {:?}", path))?;
            let summary = splice::splice_all(&content, patches)?;

            if summary.applied == 0 {
                return Ok(FixReport {
                    status: FixStatus::Skipped,
                    message: "    [SKIP] Already applied.".to_string(),
                });
            }
            if dry_run {
                return Ok(FixReport {
                    status: FixStatus::DryRun,
                    message: format!(
                        "    [DRY RUN] {} insertion(s) would be applied.",
                        summary.applied
                    ),
                });
            }

            fs::write(&path, summary.content)
                .with_context(|| format!("could not write {:?}", path))?;
            Ok(FixReport {
                status: FixStatus::Applied,
                message: format!(
                    "    [SUCCESS] {} insertion(s) applied, {} already present.",
                    summary.applied, summary.skipped
                ),
            })
        }
        FixOp::ReplaceAll(body) => {
            if dry_run {
                return Ok(FixReport {
                    status: FixStatus::DryRun,
                    message: "    [DRY RUN] File would be overwritten.".to_string(),
                });
            }

            fs::write(&path, body).with_context(|| format!("could not write {:?}", path))?;
            Ok(FixReport {
                status: FixStatus::Applied,
                message: "    [SUCCESS] File overwritten with known-good content.".to_string(),
            })
        }
        FixOp::AppendLog(entry) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("could not read {:?}", path))?;
            let new_content = changelog::append_entry(&content, entry)?;

            if dry_run {
                return Ok(FixReport {
                    status: FixStatus::DryRun,
                    message: format!(
                        "    [DRY RUN] Entry would be appended under {:?}.",
                        entry.section
                    ),
                });
            }

            fs::write(&path, new_content)
                .with_context(|| format!("could not write {:?}", path))?;
            Ok(FixReport {
                status: FixStatus::Applied,
                message: format!("    [SUCCESS] Entry appended under {:?}.", entry.section),
            })
        }
    }
}
