//! Year-over-year change rates.
//!
//! A previous-year value of zero is common for new accounts, so the rate is a
//! two-variant result rather than a float that could be `inf` or `NaN`.

use crate::parser::schema::Stats;
use serde::{Serialize, Serializer};
use std::fmt;

/// Percentage change between two years, or no rate when it is undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeRate {
    Rate(f64),
    NoRate,
}

impl fmt::Display for ChangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeRate::Rate(value) => write!(f, "{:+.2}%", value),
            ChangeRate::NoRate => f.write_str("-"),
        }
    }
}

/// A number when defined, `"-"` otherwise
impl Serialize for ChangeRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChangeRate::Rate(value) => serializer.serialize_f64(*value),
            ChangeRate::NoRate => serializer.serialize_str("-"),
        }
    }
}

/// Compute the percentage change from `previous` to `current`
///
/// **Public** - applied per metric at render time
///
/// # Returns
/// * `ChangeRate::NoRate` - `previous` is zero, an input is not finite, or
///   the ratio is not finite
/// * `ChangeRate::Rate` - `(current - previous) / previous * 100`, truncated
///   toward zero at the second decimal place
pub fn change_rate(previous: f64, current: f64) -> ChangeRate {
    if !previous.is_finite() || !current.is_finite() {
        return ChangeRate::NoRate;
    }

    if previous == 0.0 {
        return ChangeRate::NoRate;
    }

    let ratio = ((current - previous) / previous) * 100.0;
    if !ratio.is_finite() {
        return ChangeRate::NoRate;
    }

    ChangeRate::Rate(truncate_hundredths(ratio))
}

/// Convenience wrapper for the integer counters in [`Stats`]
pub fn count_change_rate(previous: u64, current: u64) -> ChangeRate {
    change_rate(previous as f64, current as f64)
}

/// Drop everything past the second decimal place.
///
/// The nudge absorbs binary representation error, so 28.999999999 (from
/// 0.29 * 100) truncates to 0.29 and not 0.28.
fn truncate_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let nudged = scaled + scaled.signum() * 1e-9;
    let truncated = nudged.trunc() / 100.0;
    // avoid printing "-0.00"
    if truncated == 0.0 {
        0.0
    } else {
        truncated
    }
}

/// One comparable metric with last year's value and the change rate
#[derive(Debug, Clone, PartialEq)]
pub struct MetricComparison {
    pub label: &'static str,
    pub current: u64,
    pub previous: u64,
    pub rate: ChangeRate,
}

impl MetricComparison {
    fn new(label: &'static str, current: u64, previous: u64) -> Self {
        Self {
            label,
            current,
            previous,
            rate: count_change_rate(previous, current),
        }
    }
}

impl Stats {
    /// The four year-over-year comparisons shown alongside the totals
    pub fn comparisons(&self) -> Vec<MetricComparison> {
        let previous = &self.previous_year_stats;
        vec![
            MetricComparison::new(
                "Total Commits",
                self.total_commit_count,
                previous.total_commit_count,
            ),
            MetricComparison::new(
                "Completed Issues",
                self.closed_issues_assigned,
                previous.closed_issues_assigned_count,
            ),
            MetricComparison::new(
                "Created PRs",
                self.opened_pull_requests,
                previous.opened_pull_requests,
            ),
            MetricComparison::new(
                "Reviewed PRs",
                self.reviewed_pull_requests,
                previous.reviewed_pull_requests,
            ),
        ]
    }
}
