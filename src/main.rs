//! GitHub Recap CLI
//!
//! Fetches a year of GitHub activity and the year before it, aggregates
//! them into recap statistics and writes a JSON report.

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use github_recap::commands::{
    display_schema, display_version, execute_grid, execute_recap, validate_args,
    validate_report_file, GridArgs, RecapArgs,
};
use github_recap::utils::config::DEFAULT_GRAPHQL_ENDPOINT;

/// GitHub Recap - annual activity summary for GitHub users
#[derive(Parser, Debug)]
#[command(name = "github-recap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a year of activity and write the recap report
    Recap {
        /// GitHub login
        #[arg(short, long)]
        login: String,

        /// GitHub token
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Recap year (defaults to the current UTC year)
        #[arg(short, long)]
        year: Option<i32>,

        /// GraphQL endpoint URL
        #[arg(short, long, default_value = DEFAULT_GRAPHQL_ENDPOINT)]
        endpoint: String,

        /// Output path for JSON report
        #[arg(short, long, default_value = "recap.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print the contribution calendar of a report
    Grid {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Print week rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Recap {
            login,
            token,
            year,
            endpoint,
            output,
            summary,
        } => {
            let args = RecapArgs {
                login: login.trim().to_string(),
                token,
                year: year.unwrap_or_else(|| Utc::now().year()),
                endpoint,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_recap(args)?;
        }

        Commands::Grid { file, json } => {
            execute_grid(GridArgs { file, json })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
