// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Command handlers return data instead of printing directly; rendering
//! lives in [`crate::output`].

use issuesync_core::Issue;
use serde::Serialize;

/// Result from the issue list and create commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IssuesResult {
    /// Issues passing the owner filter, in server order.
    pub issues: Vec<Issue>,
    /// Size of the full collection before filtering.
    pub total_count: usize,
    /// Owner filter that was applied (if any).
    pub owner_filter: Option<String>,
}

/// Result from the blacklist add command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BlacklistResult {
    /// Owner name that was blacklisted.
    pub owner: String,
}
