//! GitHub Recap
//!
//! Annual activity recap for GitHub users: contribution totals, commit
//! rankings, monthly and weekday series, year-over-year change rates and a
//! Sunday-aligned contribution calendar.
//!
//! This crate provides the core implementation for the
//! `github-recap` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! export GITHUB_TOKEN=...
//! github-recap recap --login octocat --year 2024 --summary
//! github-recap grid --file recap.json
//! ```

pub mod aggregator;
pub mod calendar;
pub mod commands;
pub mod github;
pub mod output;
pub mod parser;
pub mod utils;
