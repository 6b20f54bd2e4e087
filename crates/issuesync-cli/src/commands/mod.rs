// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the issuesync CLI.

pub mod blacklist;
pub mod issue;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use issuesync_core::{GraphQlClient, GraphQlExecutor, IssueDraft, ServerConfig};
use tracing::debug;

use crate::cli::{BlacklistCommand, Commands, IssueCommand, OutputContext};
use crate::output;

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: &OutputContext, server: &ServerConfig) -> Result<()> {
    let client: Arc<dyn GraphQlExecutor> =
        Arc::new(GraphQlClient::new(server).context("Failed to create GraphQL client")?);
    debug!(endpoint = %server.endpoint_url, "GraphQL client ready");

    match command {
        Commands::Issue(issue_cmd) => match issue_cmd {
            IssueCommand::List { owner } => {
                let result = issue::list(client, owner).await?;
                output::render(&result, ctx)
            }
            IssueCommand::Create {
                title,
                owner,
                effort,
                due,
            } => {
                let mut draft = IssueDraft::from_input(&title, &owner, &effort);
                draft.due = due;
                let result = issue::create(client, draft).await?;
                output::render(&result, ctx)
            }
        },

        Commands::Blacklist(blacklist_cmd) => match blacklist_cmd {
            BlacklistCommand::Add { name } => {
                let result = blacklist::add(client, name).await?;
                output::render(&result, ctx)
            }
        },
    }
}
