//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod grid;
pub mod models;
pub mod recap;
pub mod utils;

// Re-export main command functions
pub use grid::execute_grid;
pub use models::{GridArgs, RecapArgs};
pub use recap::{execute_recap, validate_args};
pub use utils::{check_report, display_schema, display_version, validate_report_file};
