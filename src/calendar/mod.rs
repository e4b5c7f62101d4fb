//! Calendar grid layout for daily contribution data.
//!
//! This module turns `Stats::weekly_contributions` into Sunday-aligned week
//! rows and maps each cell's count to an intensity level.

pub mod color;
pub mod describe;
pub mod grid;

// Re-export main types
pub use color::{color_for, ContributionBand, ContributionLevel, CONTRIBUTION_BANDS};
pub use describe::{describe_cell, format_pretty_date};
pub use grid::{build_weeks, grid_total, DayCell, WeekRow};
