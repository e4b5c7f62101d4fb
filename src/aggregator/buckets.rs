//! Time bucketing of daily contribution records.
//!
//! Months are keyed by (year, zero-based month) so a calendar that spans a
//! year boundary never merges two Januaries. Weekdays use Sunday = 0.

use crate::parser::schema::{ContributionDay, DayOfWeekAverage, MonthlyContribution};
use crate::utils::config::DAY_OF_WEEK_LABELS;
use chrono::Datelike;
use indexmap::IndexMap;

/// Running (sum, count) for one weekday
#[derive(Debug, Clone, Copy, Default)]
struct WeekdayAccumulator {
    total: u64,
    count: u64,
}

impl WeekdayAccumulator {
    fn record(&mut self, contributions: u32) {
        self.total += u64::from(contributions);
        self.count += 1;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total as f64 / self.count as f64
    }
}

/// Sum contributions per month
///
/// **Public** - used by the stats aggregator
///
/// # Returns
/// One entry per distinct (year, month) encountered, labeled "N月", in the
/// order each month is first seen.
pub fn monthly_contributions(days: &[ContributionDay]) -> Vec<MonthlyContribution> {
    let mut totals: IndexMap<(i32, u32), u64> = IndexMap::new();

    for day in days {
        let key = (day.date.year(), day.date.month0());
        *totals.entry(key).or_insert(0) += u64::from(day.contribution_count);
    }

    totals
        .into_iter()
        .map(|((_, month0), contribution_count)| MonthlyContribution {
            month: month_label(month0),
            contribution_count,
        })
        .collect()
}

/// Average contributions per weekday
///
/// **Public** - used by the stats aggregator
///
/// # Returns
/// Exactly seven entries, Sunday first. A weekday with no days averages 0.
pub fn average_by_day_of_week(days: &[ContributionDay]) -> Vec<DayOfWeekAverage> {
    let mut accumulators = [WeekdayAccumulator::default(); 7];

    for day in days {
        let index = day.date.weekday().num_days_from_sunday() as usize;
        accumulators[index].record(day.contribution_count);
    }

    accumulators
        .iter()
        .zip(DAY_OF_WEEK_LABELS)
        .map(|(acc, label)| DayOfWeekAverage {
            day_of_week: label.to_string(),
            average_contributions: round_hundredths(acc.average()),
        })
        .collect()
}

fn month_label(month0: u32) -> String {
    format!("{}月", month0 + 1)
}

/// `f64::round` rounds half away from zero
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
