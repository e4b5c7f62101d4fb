//! Grid command implementation.
//!
//! Reads a recap report and lays its daily series out as Sunday-aligned
//! week rows, printed as JSON or as a level-digit text grid.

use super::models::GridArgs;
use crate::calendar::{
    build_weeks, color_for, describe_cell, grid_total, ContributionLevel, DayCell, WeekRow,
};
use crate::output::{read_report, render_text_grid};
use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

/// A grid cell as printed by `grid --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GridCellJson<'a> {
    #[serde(flatten)]
    cell: &'a DayCell,
    level: ContributionLevel,
    color: &'static str,
}

impl<'a> From<&'a DayCell> for GridCellJson<'a> {
    fn from(cell: &'a DayCell) -> Self {
        let level = color_for(cell.contribution_count);
        Self {
            cell,
            level,
            color: level.color(),
        }
    }
}

/// Execute the grid command
///
/// **Public** - called from main.rs
pub fn execute_grid(args: GridArgs) -> Result<()> {
    let report = read_report(&args.file)
        .with_context(|| format!("Failed to read report {}", args.file.display()))?;

    let weeks = build_weeks(&report.stats.weekly_contributions);
    info!(
        "Built {} week rows from {} days",
        weeks.len(),
        report.stats.weekly_contributions.len()
    );

    let total = grid_total(&weeks);
    if total != report.stats.total_contributions {
        warn!(
            "Grid total {} does not match report total {}",
            total, report.stats.total_contributions
        );
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&annotate_weeks(&weeks))
            .context("Failed to serialize week rows")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{} · {}", report.login, report.year);
    println!("{}", render_text_grid(&weeks));
    if let Some(description) = busiest_day(&weeks).and_then(describe_cell) {
        println!("Busiest day: {}", description);
    }

    Ok(())
}

fn annotate_weeks(weeks: &[WeekRow]) -> Vec<Vec<GridCellJson<'_>>> {
    weeks
        .iter()
        .map(|week| week.iter().map(GridCellJson::from).collect())
        .collect()
}

/// Real cell with the highest count; the earliest wins ties
fn busiest_day(weeks: &[WeekRow]) -> Option<&DayCell> {
    weeks
        .iter()
        .flatten()
        .filter(|cell| !cell.is_placeholder())
        .fold(None, |best: Option<&DayCell>, cell| match best {
            Some(b) if b.contribution_count >= cell.contribution_count => Some(b),
            _ => Some(cell),
        })
}
