//! Output writers for recap data.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Plain-text summaries
//! - Plain-text contribution grids

pub mod json;
pub mod summary;
pub mod text_grid;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use summary::generate_text_summary;
pub use text_grid::render_text_grid;
