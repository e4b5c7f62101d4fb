use chrono::{NaiveDate, TimeZone, Utc};
use github_recap::commands::check_report;
use github_recap::output::{read_report, render_text_grid, report_to_string, write_report};
use github_recap::calendar::build_weeks;
use github_recap::parser::{
    ContributionDay, DayOfWeekAverage, MonthlyContribution, RecapReport, Stats, UserProfile,
};
use github_recap::utils::config::{DAY_OF_WEEK_LABELS, SCHEMA_VERSION};
use github_recap::utils::OutputError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn sample_report() -> RecapReport {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let days: Vec<ContributionDay> = start
        .iter_days()
        .take(3)
        .zip([2, 0, 4])
        .map(|(date, count)| ContributionDay::new(date, count))
        .collect();

    RecapReport {
        version: SCHEMA_VERSION.to_string(),
        login: "octocat".to_string(),
        year: 2024,
        generated_at: "2025-01-01T00:00:00Z".to_string(),
        stats: Stats {
            user_profile: UserProfile {
                joined_date: Some(Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()),
                bio: Some("hi".to_string()),
                avatar_url: "https://avatars.example/u/583231".to_string(),
                following_count: 9,
                followers_count: 1000,
            },
            total_contributions: 6,
            weekly_contributions: days,
            monthly_contributions: vec![MonthlyContribution {
                month: "1月".to_string(),
                contribution_count: 6,
            }],
            average_contributions_by_day_of_week: DAY_OF_WEEK_LABELS
                .iter()
                .map(|label| DayOfWeekAverage {
                    day_of_week: label.to_string(),
                    average_contributions: 1.5,
                })
                .collect(),
            ..Default::default()
        },
    }
}

#[test]
fn test_write_and_read_report() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("nested").join("recap.json");
    let report = sample_report();

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded, report);
    assert!(check_report(&loaded).is_ok());
}

#[test]
fn test_report_json_is_camel_case() {
    let json = report_to_string(&sample_report()).unwrap();

    assert!(json.contains("\"generatedAt\""));
    assert!(json.contains("\"totalContributions\": 6"));
    assert!(json.contains("\"averageContributionsByDayOfWeek\""));
    assert!(json.contains("\"closedIssuesAssignedCount\""));
    assert!(json.contains("\"date\": \"2024-01-01\""));
}

#[test]
fn test_write_report_into_directory_fails() {
    let temp_dir = tempdir().unwrap();
    assert!(write_report(&sample_report(), temp_dir.path()).is_err());
}

#[test]
fn test_read_missing_report_reports_read_failure() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    let err = read_report(&path).unwrap_err();

    assert!(matches!(err, OutputError::ReadFailed { .. }));
    assert!(!err.to_string().contains("write"));
}

#[test]
fn test_render_text_grid_from_report() {
    let report = sample_report();
    let rendered = render_text_grid(&build_weeks(&report.stats.weekly_contributions));

    // 2024-01-01 is a Monday
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], ".");
    assert_eq!(lines[1], "1");
    assert_eq!(lines[2], "0");
    assert_eq!(lines[3], "1");
    assert_eq!(lines[4], "");
    assert_eq!(lines[7], "6 contributions");
}
