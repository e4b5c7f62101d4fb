//! The annual recap query and its variables.
//!
//! The same query is issued once per year; only the variables change.

use crate::utils::config::{year_bounds, year_dates, MAX_COMMIT_REPOSITORIES, MAX_REPOSITORIES};
use crate::utils::error::GraphQlError;
use serde_json::json;

pub const RECAP_QUERY: &str = r#"
query (
  $login: String!,
  $from: DateTime!,
  $to: DateTime!,
  $maxCommitRepositories: Int!,
  $maxRepositories: Int!,
  $closedIssuesByAssigneeQuery: String!,
  $reviewedPRsSearchQuery: String!
) {
  user(login: $login) {
    createdAt
    bio
    avatarUrl
    followers { totalCount }
    following { totalCount }
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
      commitContributionsByRepository(maxRepositories: $maxCommitRepositories) {
        repository { nameWithOwner }
        contributions { totalCount }
      }
      pullRequestContributions(first: 1) { totalCount }
      pullRequestReviewContributions(first: 1) { totalCount }
    }
    repositories(first: $maxRepositories, orderBy: { field: CREATED_AT, direction: DESC }) {
      nodes {
        nameWithOwner
        stargazerCount
        primaryLanguage { name }
        createdAt
      }
    }
  }
  closedIssuesAssigned: search(query: $closedIssuesByAssigneeQuery, type: ISSUE, first: 1) {
    issueCount
  }
  reviewedPRs: search(query: $reviewedPRsSearchQuery, type: ISSUE, first: 1) {
    issueCount
  }
}
"#;

/// Build the variables for one (login, year) pair
///
/// # Errors
/// * `GraphQlError::InvalidInput` - empty login or a year chrono cannot represent
pub fn recap_variables(login: &str, year: i32) -> Result<serde_json::Value, GraphQlError> {
    let login = login.trim();
    if login.is_empty() {
        return Err(GraphQlError::InvalidInput(
            "GitHub login is required".to_string(),
        ));
    }

    let invalid_year = || GraphQlError::InvalidInput(format!("Unsupported year: {}", year));
    let (from, to) = year_bounds(year).ok_or_else(invalid_year)?;
    let (first_day, last_day) = year_dates(year).ok_or_else(invalid_year)?;
    let range = format!("{}..{}", first_day, last_day);

    Ok(json!({
        "login": login,
        "from": from.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        "to": to.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        "maxCommitRepositories": MAX_COMMIT_REPOSITORIES,
        "maxRepositories": MAX_REPOSITORIES,
        "closedIssuesByAssigneeQuery": format!("assignee:{} is:issue is:closed closed:{}", login, range),
        "reviewedPRsSearchQuery": format!("reviewed-by:{} is:pr updated:{}", login, range),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recap_variables() {
        let vars = recap_variables("octocat", 2024).unwrap();

        assert_eq!(vars["login"], "octocat");
        assert_eq!(vars["from"], "2024-01-01T00:00:00Z");
        assert_eq!(vars["to"], "2024-12-31T23:59:59Z");
        assert_eq!(
            vars["closedIssuesByAssigneeQuery"],
            "assignee:octocat is:issue is:closed closed:2024-01-01..2024-12-31"
        );
        assert_eq!(
            vars["reviewedPRsSearchQuery"],
            "reviewed-by:octocat is:pr updated:2024-01-01..2024-12-31"
        );
    }

    #[test]
    fn test_recap_variables_rejects_empty_login() {
        assert!(matches!(
            recap_variables("  ", 2024),
            Err(GraphQlError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_query_declares_every_variable() {
        let vars = recap_variables("octocat", 2024).unwrap();
        for name in vars.as_object().unwrap().keys() {
            assert!(RECAP_QUERY.contains(&format!("${}:", name)), "missing ${}", name);
        }
    }
}
