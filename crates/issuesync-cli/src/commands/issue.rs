// SPDX-License-Identifier: Apache-2.0

//! Issue list and create commands.

use std::sync::Arc;

use anyhow::Result;
use issuesync_core::{GraphQlExecutor, IssueDraft, IssueRepository};
use tracing::{debug, instrument};

use super::types::IssuesResult;

/// Loads all issues and applies the owner filter.
#[instrument(skip_all, fields(owner_filter = ?owner))]
pub async fn list(
    executor: Arc<dyn GraphQlExecutor>,
    owner: Option<String>,
) -> Result<IssuesResult> {
    let mut repo = IssueRepository::new(executor);
    repo.load().await?;
    Ok(snapshot(&mut repo, owner))
}

/// Creates an issue; the repository reloads the list on success.
#[instrument(skip_all, fields(owner = %draft.owner))]
pub async fn create(
    executor: Arc<dyn GraphQlExecutor>,
    draft: IssueDraft,
) -> Result<IssuesResult> {
    let mut repo = IssueRepository::new(executor);
    repo.create(&draft).await?;
    debug!(
        issue_count = repo.issues().len(),
        "Issue list refreshed after create"
    );
    Ok(snapshot(&mut repo, None))
}

fn snapshot(repo: &mut IssueRepository, owner: Option<String>) -> IssuesResult {
    repo.set_filter(owner.as_deref().unwrap_or_default());
    IssuesResult {
        issues: repo.filtered_view().into_iter().cloned().collect(),
        total_count: repo.issues().len(),
        owner_filter: owner,
    }
}
