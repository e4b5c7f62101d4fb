//! Commit rankings by repository and by language.
//!
//! Only repositories present in the commit-contribution list take part;
//! a repository the user owns but did not commit to this year is invisible here.

use crate::parser::schema::{LanguageCommitStats, RepositoryCommitStats};
use crate::parser::snapshot::{CommitContribution, RepositoryNode};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

/// Rank repositories by commit count
///
/// **Public** - used by the stats aggregator
///
/// # Arguments
/// * `contributions` - Commit contributions by repository, in API order
/// * `top_n` - Number of repositories to keep
///
/// # Returns
/// At most `top_n` repositories, descending by commits. Equal counts keep
/// their API order (`sort_by` is stable).
pub fn rank_repositories(
    contributions: &[CommitContribution],
    top_n: usize,
) -> Vec<RepositoryCommitStats> {
    let mut ranked: Vec<RepositoryCommitStats> = contributions
        .iter()
        .map(|item| RepositoryCommitStats {
            name_with_owner: item.repository.name_with_owner.clone(),
            commit_count: item.contributions.total_count,
        })
        .collect();

    ranked.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    ranked.truncate(top_n);

    debug!(
        "Ranked {} of {} repositories by commits",
        ranked.len(),
        contributions.len()
    );

    ranked
}

/// Rank languages by the commits made to repositories written in them
///
/// **Public** - used by the stats aggregator
///
/// The language lookup covers the full repository list, not just the ranked
/// top repositories. Commits to repositories with no primary language, or
/// missing from the repository list, are not attributed to any language.
pub fn rank_languages(
    contributions: &[CommitContribution],
    repositories: &[RepositoryNode],
) -> Vec<LanguageCommitStats> {
    let language_by_repo: HashMap<&str, Option<&str>> = repositories
        .iter()
        .map(|repo| (repo.name_with_owner.as_str(), repo.language()))
        .collect();

    // IndexMap keeps first-seen order, so equal totals come out deterministically
    let mut totals: IndexMap<&str, u64> = IndexMap::new();
    for item in contributions {
        let name = item.repository.name_with_owner.as_str();
        if let Some(Some(language)) = language_by_repo.get(name) {
            *totals.entry(*language).or_insert(0) += item.contributions.total_count;
        }
    }

    let mut ranked: Vec<LanguageCommitStats> = totals
        .into_iter()
        .map(|(language, commit_count)| LanguageCommitStats {
            language: language.to_string(),
            commit_count,
        })
        .collect();

    ranked.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));

    debug!("Ranked {} languages by commits", ranked.len());

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::snapshot::{Language, RepositoryRef, TotalCount};

    fn contribution(name: &str, commits: u64) -> CommitContribution {
        CommitContribution {
            repository: RepositoryRef {
                name_with_owner: name.to_string(),
            },
            contributions: TotalCount {
                total_count: commits,
            },
        }
    }

    fn repo(name: &str, language: Option<&str>) -> RepositoryNode {
        RepositoryNode {
            name_with_owner: name.to_string(),
            stargazer_count: 0,
            primary_language: language.map(|name| Language {
                name: name.to_string(),
            }),
            created_at: None,
        }
    }

    #[test]
    fn test_rank_repositories_truncates_and_keeps_tie_order() {
        let contributions = vec![
            contribution("a/one", 3),
            contribution("a/two", 10),
            contribution("a/three", 3),
            contribution("a/four", 7),
            contribution("a/five", 1),
            contribution("a/six", 3),
        ];

        let ranked = rank_repositories(&contributions, 5);
        let names: Vec<&str> = ranked.iter().map(|r| r.name_with_owner.as_str()).collect();

        assert_eq!(names, vec!["a/two", "a/four", "a/one", "a/three", "a/six"]);
    }

    #[test]
    fn test_rank_languages_uses_full_repository_list() {
        let contributions = vec![
            contribution("a/web", 4),
            contribution("a/cli", 6),
            contribution("a/notes", 9),
            contribution("b/fork", 2),
        ];
        let repositories = vec![
            repo("a/cli", Some("Rust")),
            repo("a/web", Some("TypeScript")),
            repo("a/notes", None),
            repo("a/old", Some("Go")),
        ];

        let ranked = rank_languages(&contributions, &repositories);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].language, "Rust");
        assert_eq!(ranked[0].commit_count, 6);
        assert_eq!(ranked[1].language, "TypeScript");
        assert_eq!(ranked[1].commit_count, 4);
    }

    #[test]
    fn test_rank_languages_merges_same_language() {
        let contributions = vec![contribution("a/x", 2), contribution("a/y", 5)];
        let repositories = vec![repo("a/x", Some("Rust")), repo("a/y", Some("Rust"))];

        let ranked = rank_languages(&contributions, &repositories);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].commit_count, 7);
    }
}
