// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for issuesync.
//!
//! Uses clap's derive API with noun-verb subcommands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json)
    pub format: OutputFormat,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format. Expected YYYY-MM-DD, got: {date_str}"))
}

/// issuesync - issue tracker client over GraphQL.
///
/// Lists, creates and blacklists issues on a GraphQL issue tracker server.
#[derive(Parser)]
#[command(name = "issuesync")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured GraphQL endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Work with issues
    #[command(subcommand)]
    Issue(IssueCommand),

    /// Manage the owner blacklist
    #[command(subcommand)]
    Blacklist(BlacklistCommand),
}

/// Issue subcommands
#[derive(Subcommand)]
pub enum IssueCommand {
    /// List issues, optionally filtered by owner
    List {
        /// Case-insensitive owner substring
        #[arg(long)]
        owner: Option<String>,
    },

    /// Create an issue and show the refreshed list
    Create {
        /// Issue title
        #[arg(long)]
        title: String,

        /// Issue owner
        #[arg(long)]
        owner: String,

        /// Effort estimate (non-numeric input is sent as absent)
        #[arg(long, default_value = "")]
        effort: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },
}

/// Blacklist subcommands
#[derive(Subcommand)]
pub enum BlacklistCommand {
    /// Add an owner name to the blacklist
    Add {
        /// Owner name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_calendar_dates() {
        assert_eq!(
            parse_date("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("01/02/2023").is_err());
    }

    #[test]
    fn cli_parses_create_arguments() {
        let cli = Cli::try_parse_from([
            "issuesync",
            "--endpoint",
            "http://localhost:4000/graphql",
            "issue",
            "create",
            "--title",
            "Crash",
            "--owner",
            "Alice",
            "--effort",
            "3",
            "--due",
            "2024-01-31",
        ])
        .unwrap();

        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:4000/graphql")
        );
        match cli.command {
            Commands::Issue(IssueCommand::Create {
                title,
                owner,
                effort,
                due,
            }) => {
                assert_eq!(title, "Crash");
                assert_eq!(owner, "Alice");
                assert_eq!(effort, "3");
                assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 31));
            }
            _ => panic!("expected issue create"),
        }
    }
}
