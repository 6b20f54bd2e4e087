// SPDX-License-Identifier: Apache-2.0

//! GraphQL transport.
//!
//! Sends one POST per operation to the configured endpoint, decodes the body
//! with [`crate::codec`] and classifies the first reported error. Expected
//! failures are returned inside [`GraphQlResponse`], never as panics or
//! early returns, so callers can always tell a hard failure from partial
//! data with an error from a clean success. No retry is attempted.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::codec::{self, Value};
use crate::config::ServerConfig;
use crate::error::SyncError;

/// Extension code the server uses for input validation failures.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Request body sent to the endpoint.
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a serde_json::Value,
}

/// One entry of the response `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphQlErrorEntry {
    /// Top-level error message.
    #[serde(default)]
    pub message: String,
    /// Server extensions.
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

/// The `extensions` object of an error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorExtensions {
    /// Error code such as `BAD_USER_INPUT`.
    #[serde(default)]
    pub code: Option<String>,
    /// Nested exception details.
    #[serde(default)]
    pub exception: Option<ErrorException>,
}

/// The `extensions.exception` object of an error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorException {
    /// Per-field validation messages.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl GraphQlErrorEntry {
    /// Extension code, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.code.as_deref())
    }

    /// Field-level validation messages, empty if absent.
    #[must_use]
    pub fn details(&self) -> &[String] {
        self.extensions
            .as_ref()
            .and_then(|e| e.exception.as_ref())
            .map(|x| x.errors.as_slice())
            .unwrap_or_default()
    }

    /// Classifies this entry into a [`SyncError`].
    ///
    /// `BAD_USER_INPUT` becomes `Validation` with the details appended one per
    /// line; every other code becomes `Server` with code and message verbatim.
    #[must_use]
    pub fn classify(&self) -> SyncError {
        if self.code() == Some(BAD_USER_INPUT) {
            let details = self.details();
            let message = if details.is_empty() {
                self.message.clone()
            } else {
                format!("{}:\n {}", self.message, details.join("\n "))
            };
            SyncError::Validation { message }
        } else {
            SyncError::Server {
                code: self.code().map(str::to_string),
                message: self.message.clone(),
            }
        }
    }
}

/// Outcome of one GraphQL operation.
///
/// | `data`  | `error` | meaning                             |
/// |---------|---------|-------------------------------------|
/// | any     | `None`  | clean success                       |
/// | `Some`  | `Some`  | partial data with a reported error  |
/// | `None`  | `Some`  | hard failure or error without data  |
#[derive(Debug, Clone, Default)]
pub struct GraphQlResponse {
    /// The envelope's `data` field with dates decoded; `None` if absent or null.
    pub data: Option<Value>,
    /// Every entry of the envelope's `errors` array.
    pub errors: Vec<GraphQlErrorEntry>,
    /// Classification of the first error, or of a transport/decoding failure.
    pub error: Option<SyncError>,
}

impl GraphQlResponse {
    /// A response carrying only a failure and no data.
    #[must_use]
    pub fn failure(error: SyncError) -> Self {
        Self {
            data: None,
            errors: Vec::new(),
            error: Some(error),
        }
    }

    /// Builds a response from a raw body.
    ///
    /// The whole body is decoded before any field is read.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let envelope = match codec::decode(body) {
            Ok(envelope) => envelope,
            Err(err) => return Self::failure(err),
        };

        let data = envelope.get("data").filter(|d| !d.is_null()).cloned();

        let errors: Vec<GraphQlErrorEntry> = match envelope.get("errors") {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => match raw.to_typed() {
                Ok(errors) => errors,
                Err(err) => {
                    return Self {
                        data,
                        errors: Vec::new(),
                        error: Some(err),
                    };
                }
            },
        };

        let error = errors.first().map(GraphQlErrorEntry::classify);
        Self {
            data,
            errors,
            error,
        }
    }

    /// Returns true when no error was reported.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapses the response into a `Result`, discarding partial data on error.
    pub fn into_result(self) -> Result<Value, SyncError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data.unwrap_or(Value::Null)),
        }
    }
}

/// Executes GraphQL operations.
///
/// The reqwest-backed [`GraphQlClient`] is the production implementation;
/// tests substitute scripted executors.
#[async_trait]
pub trait GraphQlExecutor: Send + Sync {
    /// Executes `document` with `variables` (a JSON object; `null` is sent as `{}`).
    async fn execute(&self, document: &str, variables: serde_json::Value) -> GraphQlResponse;
}

/// HTTP GraphQL client bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Creates a client for the configured endpoint.
    ///
    /// No timeout is set; reqwest's defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Config` if the endpoint URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, SyncError> {
        let endpoint = Url::parse(&config.endpoint_url).map_err(|e| SyncError::Config {
            message: format!("invalid endpoint_url '{}': {e}", config.endpoint_url),
        })?;

        let http = Client::builder().build().map_err(|e| SyncError::Config {
            message: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self { http, endpoint })
    }

    /// The endpoint every operation is posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlExecutor for GraphQlClient {
    #[instrument(skip(self, document, variables), fields(endpoint = %self.endpoint))]
    async fn execute(&self, document: &str, variables: serde_json::Value) -> GraphQlResponse {
        let variables = if variables.is_null() {
            json!({})
        } else {
            variables
        };
        let request = GraphQlRequest {
            query: document,
            variables: &variables,
        };

        let start = Instant::now();
        let response = match self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Failed to send GraphQL request");
                return GraphQlResponse::failure(err.into());
            }
        };

        // GraphQL servers answer validation failures with 4xx and an
        // `errors` envelope, so the body is read regardless of status.
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "Failed to read GraphQL response body");
                return GraphQlResponse::failure(err.into());
            }
        };

        let result = GraphQlResponse::from_body(&body);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result.error {
            Some(err) => warn!(
                status = status.as_u16(),
                duration_ms,
                error_kind = %err.kind(),
                error_count = result.errors.len(),
                "GraphQL operation reported an error"
            ),
            None => debug!(
                status = status.as_u16(),
                duration_ms,
                bytes = body.len(),
                "GraphQL operation succeeded"
            ),
        }
        result
    }
}
