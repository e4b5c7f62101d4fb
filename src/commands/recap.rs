//! Recap command implementation.
//!
//! The recap command:
//! 1. Fetches the recap year and the year before from GitHub
//! 2. Parses both responses into snapshots
//! 3. Aggregates them into stats
//! 4. Writes the JSON report (and optionally prints a summary)

use super::models::RecapArgs;
use crate::aggregator::aggregate;
use crate::github::{GitHubClient, RawSnapshotData};
use crate::output::{generate_text_summary, write_report};
use crate::parser::{parse_snapshot, RecapReport};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, SecondsFormat, Utc};
use log::{debug, info};
use std::time::Instant;

/// Earliest year GitHub has activity for
const FIRST_GITHUB_YEAR: i32 = 2008;

/// Longest login GitHub allows
const MAX_LOGIN_LENGTH: usize = 39;

/// Execute the recap command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * GraphQL request failures (either year)
/// * Unknown user or malformed response
/// * File write errors
pub fn execute_recap(args: RecapArgs) -> Result<RecapReport> {
    let start_time = Instant::now();

    info!("Starting recap of {} for {}", args.year, args.login);
    info!("GraphQL endpoint: {}", args.endpoint);

    // Step 1: Fetch both years
    info!("Step 1/4: Fetching {} and {} from GitHub...", args.year, args.year - 1);
    let client = GitHubClient::new(&args.endpoint, &args.token)
        .context("Failed to create GitHub client")?;
    let (current_raw, previous_raw) = fetch_both_years(&client, &args.login, args.year)?;

    // Step 2: Parse snapshots
    info!("Step 2/4: Parsing responses...");
    let current = parse_snapshot(&args.login, args.year, &current_raw)
        .with_context(|| format!("Failed to parse {} response", args.year))?;
    let previous = parse_snapshot(&args.login, args.year - 1, &previous_raw)
        .with_context(|| format!("Failed to parse {} response", args.year - 1))?;

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating statistics...");
    let stats = aggregate(&current, &previous);

    debug!("Top repositories:");
    for (i, repo) in stats.repositories_by_commit_count.iter().take(3).enumerate() {
        debug!("  {}. {} ({} commits)", i + 1, repo.name_with_owner, repo.commit_count);
    }

    // Step 4: Write report
    info!("Step 4/4: Writing report...");
    let report = RecapReport {
        version: SCHEMA_VERSION.to_string(),
        login: args.login.clone(),
        year: args.year,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        stats,
    };

    write_report(&report, &args.output_json).context("Failed to write recap report")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(64));
        println!("{}", generate_text_summary(&report.stats, &report.login, report.year));
        println!("{}", "=".repeat(64));
    }

    let elapsed = start_time.elapsed();
    info!("Recap completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Fetch the recap year and the year before concurrently
///
/// **Private** - internal helper for execute_recap
///
/// The two reads are independent, so the previous year runs on a scoped
/// thread while the current year runs here.
fn fetch_both_years(
    client: &GitHubClient,
    login: &str,
    year: i32,
) -> Result<(RawSnapshotData, RawSnapshotData)> {
    std::thread::scope(|scope| {
        let previous = scope.spawn(|| client.fetch_annual_data(login, year - 1));
        let current = client
            .fetch_annual_data(login, year)
            .with_context(|| format!("Failed to fetch {} activity for {}", year, login))?;
        let previous = previous
            .join()
            .map_err(|_| anyhow!("Fetch thread for {} panicked", year - 1))?
            .with_context(|| format!("Failed to fetch {} activity for {}", year - 1, login))?;
        Ok((current, previous))
    })
}

/// Validate recap arguments
///
/// **Public** - called before execute_recap so no request is sent on bad input
pub fn validate_args(args: &RecapArgs) -> Result<()> {
    validate_login(&args.login)?;

    if args.token.trim().is_empty() {
        anyhow::bail!("GitHub token cannot be empty (pass --token or set GITHUB_TOKEN)");
    }

    if !args.endpoint.starts_with("http://") && !args.endpoint.starts_with("https://") {
        anyhow::bail!("GraphQL endpoint must start with http:// or https://");
    }

    let current_year = Utc::now().year();
    if args.year < FIRST_GITHUB_YEAR || args.year > current_year {
        anyhow::bail!(
            "Year must be between {} and {}",
            FIRST_GITHUB_YEAR,
            current_year
        );
    }

    Ok(())
}

/// Alphanumerics and single inner hyphens, at most 39 characters
fn validate_login(login: &str) -> Result<()> {
    if login.is_empty() {
        anyhow::bail!("GitHub login cannot be empty");
    }

    if login.len() > MAX_LOGIN_LENGTH {
        anyhow::bail!("GitHub login is too long (max {} characters)", MAX_LOGIN_LENGTH);
    }

    if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        anyhow::bail!("GitHub login contains invalid characters");
    }

    if login.starts_with('-') || login.ends_with('-') || login.contains("--") {
        anyhow::bail!("GitHub login cannot start or end with a hyphen or contain '--'");
    }

    Ok(())
}
