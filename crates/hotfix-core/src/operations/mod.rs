pub mod apply;
pub mod preflight;

pub use apply::apply_fix;
pub use preflight::run_preflight_checks;
