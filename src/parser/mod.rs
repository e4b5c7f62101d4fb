//! Response parsing and schema definitions.
//!
//! This module handles:
//! - Parsing the raw GraphQL `data` object into an annual snapshot
//! - Defining the output schema (`Stats`, `RecapReport`)

pub mod schema;
pub mod snapshot;

// Re-export main types
pub use schema::{
    ContributionDay, DayOfWeekAverage, LanguageCommitStats, MonthlyContribution,
    PreviousYearStats, RecapReport, RepositoryCommitStats, RepositorySummary, Stats, UserProfile,
};
pub use snapshot::{parse_snapshot, AnnualSnapshot, CommitContribution, RepositoryNode};
