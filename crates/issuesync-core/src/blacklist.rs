// SPDX-License-Identifier: Apache-2.0

//! Owner blacklisting.
//!
//! Blacklisting is server-side policy; nothing is cached or reflected locally.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, instrument};

use crate::error::SyncError;
use crate::graphql::GraphQlExecutor;

/// Mutation adding an owner name to the server's blacklist.
pub const ADD_TO_BLACKLIST_MUTATION: &str = "mutation addToBlackList($owner: String!) {
  addToBlackList(owner: $owner)
}";

/// Create-only wrapper around the blacklist mutation.
pub struct BlacklistService {
    executor: Arc<dyn GraphQlExecutor>,
}

impl BlacklistService {
    /// Creates a service sharing the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn GraphQlExecutor>) -> Self {
        Self { executor }
    }

    /// Adds `name` to the server-side blacklist.
    #[instrument(skip(self))]
    pub async fn blacklist_owner(&self, name: &str) -> Result<(), SyncError> {
        self.executor
            .execute(ADD_TO_BLACKLIST_MUTATION, json!({ "owner": name }))
            .await
            .into_result()?;
        debug!("Owner blacklisted");
        Ok(())
    }
}
