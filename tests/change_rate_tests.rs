use github_recap::aggregator::{change_rate, count_change_rate, language_shares, ChangeRate};
use github_recap::parser::LanguageCommitStats;

#[test]
fn test_change_rate_cases() {
    assert_eq!(change_rate(0.0, 100.0), ChangeRate::NoRate);
    assert_eq!(change_rate(100.0, 150.0), ChangeRate::Rate(50.0));
    assert_eq!(change_rate(100.0, 100.0), ChangeRate::Rate(0.0));
    assert_eq!(change_rate(100.0, 0.0), ChangeRate::Rate(-100.0));
    assert_eq!(change_rate(f64::NAN, 10.0), ChangeRate::NoRate);
    assert_eq!(change_rate(10.0, f64::NAN), ChangeRate::NoRate);
    assert_eq!(count_change_rate(3, 4), ChangeRate::Rate(33.33));
    assert_eq!(count_change_rate(3, 2), ChangeRate::Rate(-33.33));
}

#[test]
fn test_change_rate_serializes_in_comparisons() {
    let rates = vec![ChangeRate::Rate(-12.5), ChangeRate::NoRate];
    let json = serde_json::to_string(&rates).unwrap();
    assert_eq!(json, r#"[-12.5,"-"]"#);
}

#[test]
fn test_language_shares_sum_to_hundred() {
    let ranked: Vec<LanguageCommitStats> = [
        ("Rust", 17),
        ("Go", 9),
        ("C", 5),
        ("Zig", 3),
        ("Lua", 2),
        ("Nim", 1),
        ("Odin", 1),
    ]
    .iter()
    .map(|(language, commit_count)| LanguageCommitStats {
        language: language.to_string(),
        commit_count: *commit_count,
    })
    .collect();

    let shares = language_shares(&ranked, 5);
    let total: f64 = shares.iter().map(|s| s.share).sum();

    assert_eq!(shares.len(), 6);
    assert_eq!(shares[5].commit_count, 2);
    assert!((total - 100.0).abs() < 1e-9);
}
