// SPDX-License-Identifier: Apache-2.0

//! Scripted executor shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SyncError;
use crate::graphql::{GraphQlExecutor, GraphQlResponse};

/// Replays canned responses in order and records every call.
pub(crate) struct ScriptedExecutor {
    responses: Mutex<VecDeque<GraphQlResponse>>,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl ScriptedExecutor {
    pub(crate) fn new(responses: Vec<GraphQlResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Convenience constructor from raw response bodies.
    pub(crate) fn with_bodies(bodies: &[&str]) -> Self {
        Self::new(bodies.iter().map(|b| GraphQlResponse::from_body(b)).collect())
    }

    pub(crate) fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn documents(&self) -> Vec<String> {
        self.calls().into_iter().map(|(doc, _)| doc).collect()
    }
}

#[async_trait]
impl GraphQlExecutor for ScriptedExecutor {
    async fn execute(&self, document: &str, variables: serde_json::Value) -> GraphQlResponse {
        self.calls
            .lock()
            .unwrap()
            .push((document.to_string(), variables));
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            GraphQlResponse::failure(SyncError::Transport {
                message: "no scripted response left".to_string(),
            })
        })
    }
}
