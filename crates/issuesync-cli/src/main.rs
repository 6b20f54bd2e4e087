// SPDX-License-Identifier: Apache-2.0

//! issuesync - issue tracker client over GraphQL.
//!
//! Loads, filters and creates issues and blacklists owners on a GraphQL
//! issue tracker server.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use issuesync_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output);

    let mut config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if let Some(endpoint) = &cli.endpoint {
        config.server.endpoint_url.clone_from(endpoint);
        debug!("Overriding endpoint to: {endpoint}");
    }

    match commands::run(cli.command, &output_ctx, &config.server).await {
        Ok(()) => Ok(()),
        Err(e) => {
            match (output_ctx.format, errors::error_report(&e)) {
                (OutputFormat::Json, Some(report)) => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&report)
                            .context("Failed to serialize error report")?
                    );
                }
                _ => eprintln!("Error: {}", errors::format_error(&e)),
            }
            Err(e)
        }
    }
}
