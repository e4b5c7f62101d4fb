//! Configuration and constants for the CLI.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::time::Duration;

/// Default timeout for GraphQL requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Public GitHub GraphQL endpoint
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// GitHub rejects requests without a User-Agent header
pub const USER_AGENT: &str = concat!("github-recap/", env!("CARGO_PKG_VERSION"));

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of repositories kept in the commit ranking
pub const TOP_REPOSITORY_COUNT: usize = 5;

// Page sizes for the repository connections in the annual query
pub const MAX_REPOSITORIES: u32 = 100;
pub const MAX_COMMIT_REPOSITORIES: u32 = 100;

/// Languages shown individually before the rest collapse into "Others"
pub const LANGUAGE_SHARE_SLOTS: usize = 5;
pub const OTHER_LANGUAGES_LABEL: &str = "Others";

/// Weekday labels, Sunday first
pub const DAY_OF_WEEK_LABELS: [&str; 7] = [
    "日曜日",
    "月曜日",
    "火曜日",
    "水曜日",
    "木曜日",
    "金曜日",
    "土曜日",
];

/// Inclusive UTC bounds of a calendar year: `[Y-01-01T00:00:00Z, Y-12-31T23:59:59Z]`.
///
/// Returns `None` for years chrono cannot represent.
pub fn year_bounds(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let from = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let to = Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).single()?;
    Some((from, to))
}

/// First and last day of a calendar year, for search qualifiers like `closed:A..B`.
pub fn year_dates(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        let (from, to) = year_bounds(2024).unwrap();
        assert_eq!(from.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(to.to_rfc3339(), "2024-12-31T23:59:59+00:00");
    }

    #[test]
    fn test_year_dates() {
        let (first, last) = year_dates(2023).unwrap();
        assert_eq!(first.to_string(), "2023-01-01");
        assert_eq!(last.to_string(), "2023-12-31");
    }
}
