use crate::changelog;
use crate::splice;
use crate::types::{Fix, FixOp};
use std::fs;
use std::path::Path;

pub fn run_preflight_checks(root: &Path, fixes: &[Fix]) -> Result<(), Vec<String>> {
    println!("--- Running preflight checks ---");
    let mut errors = Vec::new();

    for (i, fix) in fixes.iter().enumerate() {
        let prefix = format!("  - Fix #{} for {:?}:", i + 1, fix.rel_path);
        let path = root.join(&fix.rel_path);

        if !path.exists() {
            errors.push(format!("{} FAILED (target file not found)", prefix));
            continue;
        }
        if let Ok(metadata) = fs::metadata(&path) {
            if metadata.permissions().readonly() {
                errors.push(format!("{} FAILED (file is read-only)", prefix));
                continue;
            }
        }

        match &fix.op {
            FixOp::ReplaceAll(_) => {
                println!("{} OK (file will be overwritten)", prefix);
            }
            FixOp::Splice(patches) => match fs::read_to_string(&path) {
                Ok(content) => match splice::splice_all(&content, patches) {
                    Ok(summary) if summary.applied == 0 => {
                        println!("{} OK (already applied)", prefix);
                    }
                    Ok(_) => println!("{} OK", prefix),
                    Err(e) => errors.push(format!("{} FAILED ({})", prefix, e)),
                },
                Err(e) => errors.push(format!("{} FAILED (could not read file: {})", prefix, e)),
            },
            FixOp::AppendLog(entry) => match fs::read_to_string(&path) {
                Ok(content) => match changelog::append_entry(&content, entry) {
                    Ok(_) => {
                        if changelog::has_heading(&content, &entry.section) {
                            println!("{} OK", prefix);
                        } else {
                            println!("{} OK (section will be created)", prefix);
                        }
                    }
                    Err(e) => errors.push(format!("{} FAILED ({})", prefix, e)),
                },
                Err(e) => errors.push(format!("{} FAILED (could not read file: {})", prefix, e)),
            },
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
