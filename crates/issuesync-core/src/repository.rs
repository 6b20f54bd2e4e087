// SPDX-License-Identifier: Apache-2.0

//! Canonical issue collection and its synchronization with the server.
//!
//! The collection is replaced wholesale on every successful load and never
//! patched locally. A successful create triggers a full reload so that
//! server-computed fields (`id`, `created`) and concurrent server-side
//! changes are picked up.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::error::SyncError;
use crate::graphql::GraphQlExecutor;
use crate::issue::{FilterState, Issue, IssueDraft};

/// Query fetching every scalar field of every issue.
pub const ISSUE_LIST_QUERY: &str = "query {
  issueList {
    id title status owner
    created effort due
  }
}";

/// Mutation creating an issue from an `IssueInputs` draft.
pub const ISSUE_ADD_MUTATION: &str = "mutation issueAdd($issue: IssueInputs!) {
  issueAdd(issue: $issue) {
    id
  }
}";

/// Owns the canonical issue collection and the active owner filter.
pub struct IssueRepository {
    executor: Arc<dyn GraphQlExecutor>,
    issues: Vec<Issue>,
    filter: FilterState,
}

impl IssueRepository {
    /// Creates an empty, unfiltered repository.
    #[must_use]
    pub fn new(executor: Arc<dyn GraphQlExecutor>) -> Self {
        Self {
            executor,
            issues: Vec::new(),
            filter: FilterState::default(),
        }
    }

    /// The canonical collection in server order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Fetches all issues and replaces the canonical collection.
    ///
    /// On any error, including partial data with an error, the collection
    /// is left unchanged.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), SyncError> {
        let data = self
            .executor
            .execute(ISSUE_LIST_QUERY, json!({}))
            .await
            .into_result()?;

        let list = data
            .get("issueList")
            .ok_or_else(|| SyncError::MalformedResponse {
                message: "response data has no issueList".to_string(),
            })?;
        let issues: Vec<Issue> = list.to_typed()?;

        {
            let mut seen = HashSet::with_capacity(issues.len());
            for issue in &issues {
                if !seen.insert(&issue.id) {
                    warn!(id = %issue.id, "Duplicate issue id in issueList");
                }
            }
        }

        debug!(issue_count = issues.len(), "Loaded issues");
        self.issues = issues;
        Ok(())
    }

    /// Creates an issue on the server, then reloads the collection.
    ///
    /// The draft is not validated locally. On error the collection is left
    /// unchanged and no reload happens.
    #[instrument(skip(self, draft), fields(owner = %draft.owner))]
    pub async fn create(&mut self, draft: &IssueDraft) -> Result<(), SyncError> {
        let data = self
            .executor
            .execute(ISSUE_ADD_MUTATION, json!({ "issue": draft }))
            .await
            .into_result()?;

        if let Some(id) = data.get("issueAdd").and_then(|v| v.get("id")) {
            debug!(id = %id.to_json(), "Issue created");
        }

        self.load().await
    }

    /// Sets the owner filter. No network activity.
    pub fn set_filter(&mut self, owner_substring: &str) {
        self.filter = FilterState::new(owner_substring);
    }

    /// Issues whose owner contains the filter text, case-insensitively,
    /// in canonical order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| self.filter.matches(issue))
            .collect()
    }
}
