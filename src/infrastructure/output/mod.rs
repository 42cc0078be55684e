//! Output service implementations

pub mod dry_run_output;
pub mod filesystem_output;

pub use dry_run_output::*;
pub use filesystem_output::*;
