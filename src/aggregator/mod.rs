//! Aggregation of annual snapshots into recap statistics.
//!
//! This module transforms parsed snapshots into:
//! - Commit rankings (per repository, per language)
//! - Monthly and weekday contribution buckets
//! - Year-over-year change rates and language shares

pub mod buckets;
pub mod change_rate;
pub mod ranking;
pub mod shares;
pub mod stats;

// Re-export main types and functions
pub use buckets::{average_by_day_of_week, monthly_contributions};
pub use change_rate::{change_rate, count_change_rate, ChangeRate, MetricComparison};
pub use ranking::{rank_languages, rank_repositories};
pub use shares::{language_shares, LanguageShare};
pub use stats::aggregate;
