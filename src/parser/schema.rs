//! Output JSON schema definitions for recap data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Field names are camelCase so the output can be handed to a web front end as-is.
//! Schema is versioned to allow future evolution.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecapReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// GitHub login the recap was built for
    pub login: String,

    /// Calendar year covered by `stats`
    pub year: i32,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub stats: Stats,
}

/// Derived annual statistics for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub user_profile: UserProfile,

    /// Sum of every daily count in the current-year calendar
    pub total_contributions: u64,

    /// One entry per calendar day, chronological
    pub weekly_contributions: Vec<ContributionDay>,

    /// Repositories owned by the user, newest first
    pub repositories: Vec<RepositorySummary>,

    /// Top repositories by commit count, descending
    pub repositories_by_commit_count: Vec<RepositoryCommitStats>,

    /// Every language with at least one commit, descending
    pub languages_by_commit_count: Vec<LanguageCommitStats>,

    pub total_commit_count: u64,
    pub opened_pull_requests: u64,
    pub reviewed_pull_requests: u64,
    pub closed_issues_assigned: u64,
    pub newly_created_repository_count: u64,

    /// Per-month totals in first-occurrence order
    pub monthly_contributions: Vec<MonthlyContribution>,

    /// Always seven entries, Sunday first
    pub average_contributions_by_day_of_week: Vec<DayOfWeekAverage>,

    pub previous_year_stats: PreviousYearStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub joined_date: Option<DateTime<Utc>>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub following_count: u64,
    pub followers_count: u64,
}

/// Contribution count for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, contribution_count: u32) -> Self {
        Self {
            date,
            contribution_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name_with_owner: String,
    pub language: Option<String>,
    pub stargazer_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCommitStats {
    pub name_with_owner: String,
    pub commit_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCommitStats {
    pub language: String,
    pub commit_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyContribution {
    /// "1月" .. "12月"
    pub month: String,
    pub contribution_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOfWeekAverage {
    pub day_of_week: String,
    pub average_contributions: f64,
}

/// The comparable metrics of the preceding year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousYearStats {
    pub total_commit_count: u64,
    pub opened_pull_requests: u64,
    pub reviewed_pull_requests: u64,
    pub closed_issues_assigned_count: u64,
}
