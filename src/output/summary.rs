//! Plain-text recap summary for the terminal.

use crate::aggregator::{language_shares, ChangeRate};
use crate::parser::schema::Stats;
use crate::utils::config::LANGUAGE_SHARE_SLOTS;

const BAR_WIDTH: usize = 40;

/// Create a text summary with totals, change rates, rankings and series
pub fn generate_text_summary(stats: &Stats, login: &str, year: i32) -> String {
    let mut lines = Vec::new();
    let profile = &stats.user_profile;

    lines.push(format!("  📊 GITHUB RECAP {} · {}", year, login));
    let joined = profile
        .joined_date
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!(
        "  Joined on {} · {} followers · {} following",
        joined, profile.followers_count, profile.following_count
    ));
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
        lines.push(format!("  \"{}\"", bio));
    }
    lines.push(format!(
        "  {} contributions · {} new repositories",
        stats.total_contributions, stats.newly_created_repository_count
    ));

    lines.push(String::new());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<18} ┃ {:>8} ┃ {:>8} ┃ {:>10} ┃",
        "Metric",
        year,
        year - 1,
        "Change"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━━━┫".to_string());
    for comparison in stats.comparisons() {
        let change = match comparison.rate {
            ChangeRate::Rate(value) => format!("{:+.2}%", value),
            ChangeRate::NoRate => "-".to_string(),
        };
        lines.push(format!(
            "  ┃ {:<18} ┃ {:>8} ┃ {:>8} ┃ {:>10} ┃",
            comparison.label, comparison.current, comparison.previous, change
        ));
    }
    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━━━┛".to_string());

    lines.push(String::new());
    lines.push("  Top repositories".to_string());
    if stats.repositories_by_commit_count.is_empty() {
        lines.push("    (no commits)".to_string());
    }
    for (i, repo) in stats.repositories_by_commit_count.iter().enumerate() {
        lines.push(format!(
            "    {}. {:<40} +{}",
            i + 1,
            repo.name_with_owner,
            repo.commit_count
        ));
    }

    lines.push(String::new());
    lines.push("  Languages".to_string());
    let shares = language_shares(&stats.languages_by_commit_count, LANGUAGE_SHARE_SLOTS);
    if shares.is_empty() {
        lines.push("    (no data)".to_string());
    }
    for share in &shares {
        lines.push(format!(
            "    {:<16} {:>6} commits {:>5.1}%",
            share.language, share.commit_count, share.share
        ));
    }

    lines.push(String::new());
    lines.push("  Monthly contributions".to_string());
    let month_max = stats
        .monthly_contributions
        .iter()
        .map(|m| m.contribution_count as f64)
        .fold(0.0, f64::max);
    for month in &stats.monthly_contributions {
        lines.push(format!(
            "    {:>4} {:<width$} {}",
            month.month,
            bar(month.contribution_count as f64, month_max),
            month.contribution_count,
            width = BAR_WIDTH
        ));
    }

    lines.push(String::new());
    lines.push("  Average contributions by weekday".to_string());
    let weekday_max = stats
        .average_contributions_by_day_of_week
        .iter()
        .map(|d| d.average_contributions)
        .fold(0.0, f64::max);
    for day in &stats.average_contributions_by_day_of_week {
        lines.push(format!(
            "    {} {:<width$} {:.2}",
            day.day_of_week,
            bar(day.average_contributions, weekday_max),
            day.average_contributions,
            width = BAR_WIDTH
        ));
    }

    lines.join("\n")
}

/// Horizontal bar scaled so `max` fills `BAR_WIDTH`
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.min(BAR_WIDTH))
}
