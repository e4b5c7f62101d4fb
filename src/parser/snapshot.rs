//! Parser for the annual GitHub GraphQL response.
//!
//! Turns the raw `data` object of the recap query into a typed [`AnnualSnapshot`].
//! Counts the API leaves out default to zero and optional fields to `None`,
//! so aggregation never sees a half-built snapshot.

use super::schema::ContributionDay;
use crate::utils::error::ParseError;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

/// One year of raw activity for a single user
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSnapshot {
    /// Calendar year the query was scoped to
    pub year: i32,
    pub user: GitHubUser,
    pub closed_issues_assigned: u64,
    pub reviewed_pull_requests: u64,
}

impl AnnualSnapshot {
    /// Daily records flattened out of the calendar weeks, in response order
    pub fn contribution_days(&self) -> Vec<ContributionDay> {
        self.user
            .contributions_collection
            .contribution_calendar
            .weeks
            .iter()
            .flat_map(|week| week.contribution_days.iter().copied())
            .collect()
    }

    pub fn commit_contributions(&self) -> &[CommitContribution] {
        &self
            .user
            .contributions_collection
            .commit_contributions_by_repository
    }

    pub fn repositories(&self) -> &[RepositoryNode] {
        &self.user.repositories.nodes
    }

    /// Sum of commits over every repository in the commit-contribution list
    pub fn total_commit_count(&self) -> u64 {
        self.commit_contributions()
            .iter()
            .map(|item| item.contributions.total_count)
            .sum()
    }

    pub fn opened_pull_requests(&self) -> u64 {
        self.user
            .contributions_collection
            .pull_request_contributions
            .total_count
    }
}

/// The `user` object of the response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub avatar_url: String,

    #[serde(default)]
    pub followers: TotalCount,

    #[serde(default)]
    pub following: TotalCount,

    #[serde(default)]
    pub contributions_collection: ContributionsCollection,

    #[serde(default)]
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub contribution_calendar: ContributionCalendar,

    #[serde(default)]
    pub commit_contributions_by_repository: Vec<CommitContribution>,

    #[serde(default)]
    pub pull_request_contributions: TotalCount,

    #[serde(default)]
    pub pull_request_review_contributions: TotalCount,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    /// As reported by GitHub; the recap recomputes it from the days
    #[serde(default)]
    pub total_contributions: u64,

    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitContribution {
    pub repository: RepositoryRef,

    #[serde(default)]
    pub contributions: TotalCount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    pub name_with_owner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name_with_owner: String,

    #[serde(default)]
    pub stargazer_count: u64,

    #[serde(default)]
    pub primary_language: Option<Language>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RepositoryNode {
    pub fn language(&self) -> Option<&str> {
        self.primary_language.as_ref().map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Language {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    #[serde(default)]
    pub issue_count: u64,
}

/// Shape of the `data` object returned by the recap query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotData {
    #[serde(default)]
    user: Option<GitHubUser>,

    #[serde(default)]
    closed_issues_assigned: IssueCount,

    #[serde(default, rename = "reviewedPRs")]
    reviewed_prs: IssueCount,
}

/// Parse the `data` object of a recap query response
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `login` - Login the query was issued for (used in error messages)
/// * `year` - Calendar year the query was scoped to
/// * `data` - The `data` member of the GraphQL response
///
/// # Errors
/// * `ParseError::InvalidFormat` - `data` is not an object
/// * `ParseError::UserNotFound` - `user` is null or absent
/// * `ParseError::JsonError` - a present field has the wrong type
pub fn parse_snapshot(
    login: &str,
    year: i32,
    data: &serde_json::Value,
) -> Result<AnnualSnapshot, ParseError> {
    debug!("Parsing {} snapshot for {}", year, login);

    if !data.is_object() {
        return Err(ParseError::InvalidFormat(format!(
            "expected an object for `data`, got {}",
            json_kind(data)
        )));
    }

    let parsed = SnapshotData::deserialize(data)?;
    let user = parsed
        .user
        .ok_or_else(|| ParseError::UserNotFound(login.to_string()))?;

    let snapshot = AnnualSnapshot {
        year,
        user,
        closed_issues_assigned: parsed.closed_issues_assigned.issue_count,
        reviewed_pull_requests: parsed.reviewed_prs.issue_count,
    };

    let days = snapshot.contribution_days().len();
    if days == 0 {
        warn!("Contribution calendar for {} in {} is empty", login, year);
    }
    debug!(
        "Parsed snapshot: {} days, {} repositories with commits, {} repositories",
        days,
        snapshot.commit_contributions().len(),
        snapshot.repositories().len()
    );

    Ok(snapshot)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
