use crate::utils::config::DEFAULT_GRAPHQL_ENDPOINT;
use chrono::{Datelike, Utc};
use std::path::PathBuf;

/// Arguments for the recap command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RecapArgs {
    /// GitHub login to build the recap for
    pub login: String,

    /// Token sent as a bearer credential
    pub token: String,

    /// Recap year; the year before it is fetched for comparison
    pub year: i32,

    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for RecapArgs {
    fn default() -> Self {
        Self {
            login: String::new(),
            token: String::new(),
            year: Utc::now().year(),
            endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            output_json: PathBuf::from("recap.json"),
            print_summary: false,
        }
    }
}

/// Arguments for the grid command
#[derive(Debug, Clone)]
pub struct GridArgs {
    /// Report written by the recap command
    pub file: PathBuf,

    /// Print week rows as JSON instead of the text grid
    pub json: bool,
}
