//! Week-aligned calendar rows for a contribution grid.
//!
//! Rows start on Sunday. The first row is front-padded with placeholder cells
//! up to the weekday of the earliest date; the last row is left ragged.

use crate::parser::schema::ContributionDay;
use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Serialize, Serializer};

/// A grid cell: a real day, or a placeholder before the first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// `None` for placeholders, serialized as `""`
    #[serde(serialize_with = "serialize_cell_date")]
    pub date: Option<NaiveDate>,
    pub contribution_count: u32,
}

impl DayCell {
    pub fn placeholder() -> Self {
        Self {
            date: None,
            contribution_count: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}

impl From<&ContributionDay> for DayCell {
    fn from(day: &ContributionDay) -> Self {
        Self {
            date: Some(day.date),
            contribution_count: day.contribution_count,
        }
    }
}

/// Up to seven cells, Sunday first
pub type WeekRow = Vec<DayCell>;

const DAYS_PER_WEEK: usize = 7;

fn serialize_cell_date<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
        None => serializer.serialize_str(""),
    }
}

/// Reshape daily records into Sunday-aligned week rows
///
/// **Public** - main entry point for grid building
///
/// # Arguments
/// * `days` - Daily records; expected chronological but sorted here anyway
///
/// # Returns
/// Rows of seven cells except possibly the last. Empty input gives no rows.
pub fn build_weeks(days: &[ContributionDay]) -> Vec<WeekRow> {
    let mut sorted = days.to_vec();
    // stable: equal dates keep input order
    sorted.sort_by_key(|day| day.date);

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let padding = first.date.weekday().num_days_from_sunday() as usize;

    let cells: Vec<DayCell> = std::iter::repeat(DayCell::placeholder())
        .take(padding)
        .chain(sorted.iter().map(DayCell::from))
        .collect();

    let weeks: Vec<WeekRow> = cells
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| chunk.to_vec())
        .collect();

    debug!(
        "Built {} week rows from {} days ({} placeholders)",
        weeks.len(),
        sorted.len(),
        padding
    );

    weeks
}

/// Sum of counts over every real cell
pub fn grid_total(weeks: &[WeekRow]) -> u64 {
    weeks
        .iter()
        .flatten()
        .filter(|cell| !cell.is_placeholder())
        .map(|cell| u64::from(cell.contribution_count))
        .sum()
}
