// SPDX-License-Identifier: Apache-2.0

//! Blacklist add command.

use std::sync::Arc;

use anyhow::Result;
use issuesync_core::{BlacklistService, GraphQlExecutor};

use super::types::BlacklistResult;

/// Adds `name` to the server-side blacklist.
pub async fn add(executor: Arc<dyn GraphQlExecutor>, name: String) -> Result<BlacklistResult> {
    BlacklistService::new(executor).blacklist_owner(&name).await?;
    Ok(BlacklistResult { owner: name })
}
