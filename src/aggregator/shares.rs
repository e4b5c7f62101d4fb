//! Language share of commits, for pie-style breakdowns.

use crate::parser::schema::LanguageCommitStats;
use crate::utils::config::OTHER_LANGUAGES_LABEL;
use serde::Serialize;

/// A language (or the "Others" bucket) with its share of commits
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageShare {
    pub language: String,
    pub commit_count: u64,
    /// Percentage of all ranked commits, 0..=100
    pub share: f64,
}

/// Compute per-language shares from a ranked language list
///
/// **Public** - used by the text summary
///
/// # Arguments
/// * `ranked` - Languages sorted descending (as produced by `rank_languages`)
/// * `slots` - Languages shown individually
///
/// # Returns
/// The ranked list unchanged when it has at most `slots + 1` entries; otherwise
/// the first `slots` followed by one "Others" entry summing the rest. Every
/// share is 0 when there are no commits at all.
pub fn language_shares(ranked: &[LanguageCommitStats], slots: usize) -> Vec<LanguageShare> {
    let entries: Vec<(String, u64)> = if ranked.len() <= slots + 1 {
        ranked
            .iter()
            .map(|l| (l.language.clone(), l.commit_count))
            .collect()
    } else {
        let (main, others) = ranked.split_at(slots);
        let others_total: u64 = others.iter().map(|l| l.commit_count).sum();
        main.iter()
            .map(|l| (l.language.clone(), l.commit_count))
            .chain(std::iter::once((
                OTHER_LANGUAGES_LABEL.to_string(),
                others_total,
            )))
            .collect()
    };

    let total: u64 = entries.iter().map(|(_, count)| count).sum();

    entries
        .into_iter()
        .map(|(language, commit_count)| LanguageShare {
            share: if total > 0 {
                (commit_count as f64 / total as f64) * 100.0
            } else {
                0.0
            },
            language,
            commit_count,
        })
        .collect()
}
