//! Build the annual [`Stats`] record from two snapshots.
//!
//! Everything here is a pure function of its inputs: all date math is driven
//! by dates in the snapshots, never by the wall clock.

use super::buckets::{average_by_day_of_week, monthly_contributions};
use super::ranking::{rank_languages, rank_repositories};
use crate::parser::schema::{PreviousYearStats, RepositorySummary, Stats, UserProfile};
use crate::parser::snapshot::{AnnualSnapshot, RepositoryNode};
use crate::utils::config::{year_bounds, TOP_REPOSITORY_COUNT};
use log::{debug, warn};

/// Aggregate the current and previous year into one stats record
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `current` - Snapshot of the recap year
/// * `previous` - Snapshot of the year before, used only for comparisons
///
/// # Returns
/// Fully resolved stats. Missing counts in the snapshots were already
/// defaulted to zero by the parser, so this never fails.
pub fn aggregate(current: &AnnualSnapshot, previous: &AnnualSnapshot) -> Stats {
    debug!(
        "Aggregating {} snapshot against {}",
        current.year, previous.year
    );

    let user = &current.user;
    let days = current.contribution_days();
    let total_contributions: u64 = days.iter().map(|d| u64::from(d.contribution_count)).sum();

    let reported = user.contributions_collection.contribution_calendar.total_contributions;
    if reported != total_contributions {
        debug!(
            "Calendar reports {} contributions, daily records sum to {}",
            reported, total_contributions
        );
    }

    let commit_contributions = current.commit_contributions();
    let repositories = current.repositories();

    let stats = Stats {
        user_profile: UserProfile {
            joined_date: user.created_at,
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            following_count: user.following.total_count,
            followers_count: user.followers.total_count,
        },
        total_contributions,
        repositories: repositories.iter().map(summarize_repository).collect(),
        repositories_by_commit_count: rank_repositories(commit_contributions, TOP_REPOSITORY_COUNT),
        languages_by_commit_count: rank_languages(commit_contributions, repositories),
        total_commit_count: current.total_commit_count(),
        opened_pull_requests: current.opened_pull_requests(),
        reviewed_pull_requests: current.reviewed_pull_requests,
        closed_issues_assigned: current.closed_issues_assigned,
        newly_created_repository_count: count_created_in_year(repositories, current.year),
        monthly_contributions: monthly_contributions(&days),
        average_contributions_by_day_of_week: average_by_day_of_week(&days),
        weekly_contributions: days,
        previous_year_stats: previous_year_stats(previous),
    };

    debug!(
        "Aggregated: {} contributions, {} commits, {} languages",
        stats.total_contributions,
        stats.total_commit_count,
        stats.languages_by_commit_count.len()
    );

    stats
}

/// Scalar metrics of the previous year, stored verbatim
fn previous_year_stats(previous: &AnnualSnapshot) -> PreviousYearStats {
    PreviousYearStats {
        total_commit_count: previous.total_commit_count(),
        opened_pull_requests: previous.opened_pull_requests(),
        reviewed_pull_requests: previous.reviewed_pull_requests,
        closed_issues_assigned_count: previous.closed_issues_assigned,
    }
}

/// Count repositories created inside the inclusive bounds of `year`
fn count_created_in_year(repositories: &[RepositoryNode], year: i32) -> u64 {
    let Some((from, to)) = year_bounds(year) else {
        warn!("Year {} is out of range, counting no new repositories", year);
        return 0;
    };

    repositories
        .iter()
        .filter_map(|repo| repo.created_at)
        .filter(|created| *created >= from && *created <= to)
        .count() as u64
}

fn summarize_repository(repo: &RepositoryNode) -> RepositorySummary {
    RepositorySummary {
        name_with_owner: repo.name_with_owner.clone(),
        language: repo.language().map(str::to_string),
        stargazer_count: repo.stargazer_count,
        created_at: repo.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo_created(name: &str, created: Option<(i32, u32, u32, u32, u32, u32)>) -> RepositoryNode {
        RepositoryNode {
            name_with_owner: name.to_string(),
            stargazer_count: 0,
            primary_language: None,
            created_at: created.map(|(y, mo, d, h, mi, s)| {
                Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
            }),
        }
    }

    #[test]
    fn test_count_created_in_year_is_inclusive() {
        let repos = vec![
            repo_created("a/first", Some((2024, 1, 1, 0, 0, 0))),
            repo_created("a/last", Some((2024, 12, 31, 23, 59, 59))),
            repo_created("a/before", Some((2023, 12, 31, 23, 59, 59))),
            repo_created("a/after", Some((2025, 1, 1, 0, 0, 0))),
            repo_created("a/unknown", None),
        ];

        assert_eq!(count_created_in_year(&repos, 2024), 2);
    }
}
