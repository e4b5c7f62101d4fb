use crate::output::read_report;
use crate::parser::RecapReport;
use crate::utils::config::{SCHEMA_VERSION, TOP_REPOSITORY_COUNT};
use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// Validate a recap report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    check_report(&report)?;

    let stats = &report.stats;
    println!("✓ Valid recap report");
    println!("  Version: {}", report.version);
    println!("  Login: {}", report.login);
    println!("  Year: {}", report.year);
    println!("  Total Contributions: {}", stats.total_contributions);
    println!("  Days: {}", stats.weekly_contributions.len());
    println!("  Top Repositories: {}", stats.repositories_by_commit_count.len());
    println!("  Languages: {}", stats.languages_by_commit_count.len());

    Ok(())
}

/// Structural checks a report written by `recap` always passes
///
/// **Public** - shared by the validate command and tests
pub fn check_report(report: &RecapReport) -> Result<()> {
    let stats = &report.stats;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported schema version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    let daily_total: u64 = stats
        .weekly_contributions
        .iter()
        .map(|d| u64::from(d.contribution_count))
        .sum();
    if daily_total != stats.total_contributions {
        anyhow::bail!(
            "totalContributions {} does not match the daily sum {}",
            stats.total_contributions,
            daily_total
        );
    }

    if stats.repositories_by_commit_count.len() > TOP_REPOSITORY_COUNT {
        anyhow::bail!(
            "repositoriesByCommitCount has {} entries (max {})",
            stats.repositories_by_commit_count.len(),
            TOP_REPOSITORY_COUNT
        );
    }

    let mut seen = HashSet::new();
    for language in &stats.languages_by_commit_count {
        if !seen.insert(language.language.as_str()) {
            anyhow::bail!("Language {} appears more than once", language.language);
        }
    }

    if stats.average_contributions_by_day_of_week.len() != 7 {
        anyhow::bail!(
            "averageContributionsByDayOfWeek has {} entries (expected 7)",
            stats.average_contributions_by_day_of_week.len()
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("GitHub Recap Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string                 - Schema version (e.g., '1.0.0')");
        println!("  login: string                   - GitHub login");
        println!("  year: number                    - Recap year");
        println!("  generatedAt: string             - ISO 8601 timestamp");
        println!("  stats: object");
        println!("    userProfile: object           - Join date, bio, avatar, follow counts");
        println!("    totalContributions: number    - Sum of daily counts");
        println!("    weeklyContributions: array    - Daily {{date, contributionCount}}");
        println!("    repositories: array           - Repositories owned by the user");
        println!("    repositoriesByCommitCount: array - Top {} by commits", TOP_REPOSITORY_COUNT);
        println!("    languagesByCommitCount: array - Commits per primary language");
        println!("    totalCommitCount: number");
        println!("    openedPullRequests: number");
        println!("    reviewedPullRequests: number");
        println!("    closedIssuesAssigned: number");
        println!("    newlyCreatedRepositoryCount: number");
        println!("    monthlyContributions: array   - {{month, contributionCount}}");
        println!("    averageContributionsByDayOfWeek: array - Sunday first, 7 entries");
        println!("    previousYearStats: object     - Same counters for the prior year");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("GitHub Recap v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Annual activity recap for GitHub users.");
}
