pub mod changelog;
pub mod operations;
pub mod scripts;
pub mod splice;
pub mod types;

pub use operations::{apply_fix, run_preflight_checks};
pub use scripts::{catalog, find, Script};
pub use types::{Fix, FixOp, FixReport, FixStatus, PatchError, TextPatch};
