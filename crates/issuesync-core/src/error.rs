// SPDX-License-Identifier: Apache-2.0

//! Classified error types for issuesync.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Every failure the transport can observe is mapped onto one of these
//! variants so callers can branch on [`ErrorKind`] instead of parsing text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during issuesync operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The request could not be sent or the response body could not be read.
    #[error("Error in sending data to server: {message}")]
    Transport {
        /// Underlying network error text.
        message: String,
    },

    /// The server rejected the input shape (`BAD_USER_INPUT`).
    ///
    /// The message is multi-line: the top-level error text followed by one
    /// line per field-level validation failure.
    #[error("{message}")]
    Validation {
        /// Combined validation message.
        message: String,
    },

    /// Any other error reported in the GraphQL `errors` array.
    #[error("{}", display_server(code.as_deref(), message))]
    Server {
        /// Extension code reported by the server, if any.
        code: Option<String>,
        /// Error message reported by the server.
        message: String,
    },

    /// The response arrived but could not be decoded or lacks expected fields.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure.
        message: String,
    },

    /// Configuration file or endpoint error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

fn display_server(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("{code}: {message}"),
        None => message.to_string(),
    }
}

/// Tag identifying the class of a [`SyncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No connectivity; data unusable.
    TransportError,
    /// Server rejected the input shape.
    ValidationError,
    /// Any other server-reported error.
    ServerError,
    /// Response body could not be decoded.
    MalformedResponse,
    /// Local configuration problem.
    ConfigError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TransportError => "TransportError",
            ErrorKind::ValidationError => "ValidationError",
            ErrorKind::ServerError => "ServerError",
            ErrorKind::MalformedResponse => "MalformedResponse",
            ErrorKind::ConfigError => "ConfigError",
        };
        f.write_str(name)
    }
}

/// The `{kind, message}` object handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error class.
    pub kind: ErrorKind,
    /// User-facing message.
    pub message: String,
}

impl SyncError {
    /// Returns the class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Transport { .. } => ErrorKind::TransportError,
            SyncError::Validation { .. } => ErrorKind::ValidationError,
            SyncError::Server { .. } => ErrorKind::ServerError,
            SyncError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            SyncError::Config { .. } => ErrorKind::ConfigError,
        }
    }

    /// Builds the serializable report for display.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }

    /// Returns true when no usable data accompanies this error.
    #[must_use]
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            SyncError::Transport { .. } | SyncError::MalformedResponse { .. }
        )
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for SyncError {
    fn from(err: config::ConfigError) -> Self {
        SyncError::Config {
            message: err.to_string(),
        }
    }
}
