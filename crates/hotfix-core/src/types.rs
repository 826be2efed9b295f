use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPos {
    AfterAnchorLine,
    BeforeLastAnchor,
}

// `insert` must itself contain `marker`, otherwise a rerun splices a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPatch {
    pub marker: String,
    pub anchor: String,
    pub insert: String,
    pub pos: InsertPos,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogEntry {
    pub parent: String,
    pub section: String,
    pub create_before: String,
    pub entry: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FixOp {
    Splice(Vec<TextPatch>),
    ReplaceAll(String),
    AppendLog(ChangelogEntry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub rel_path: PathBuf,
    pub op: FixOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    Applied,
    Skipped,
    DryRun,
}

#[derive(Debug, Clone)]
pub struct FixReport {
    pub status: FixStatus,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("target file not found: {0:?}")]
    TargetMissing(PathBuf),

    #[error("could not locate insertion point: anchor {0:?} not found")]
    AnchorNotFound(String),

    #[error("heading {0:?} not found")]
    HeadingNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
