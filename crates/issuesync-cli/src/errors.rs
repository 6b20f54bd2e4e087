// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `SyncError` and appends a hint per error
//! kind. The library only classifies; presentation stays here.

use anyhow::Error;
use issuesync_core::{ErrorReport, SyncError};

/// Returns the classified error inside `error`, if any.
pub fn classified(error: &Error) -> Option<&SyncError> {
    error.downcast_ref::<SyncError>()
}

/// Formats an error for CLI display with helpful hints.
pub fn format_error(error: &Error) -> String {
    let Some(sync_err) = classified(error) else {
        return format!("{error:#}");
    };

    match sync_err {
        SyncError::Transport { .. } => format!(
            "{sync_err}\n\nTip: Check that the server is running and reachable at the configured endpoint."
        ),
        SyncError::Validation { .. } => {
            format!("{sync_err}\n\nTip: Correct the fields listed above and try again.")
        }
        SyncError::Server { .. } => sync_err.to_string(),
        SyncError::MalformedResponse { .. } => format!(
            "{sync_err}\n\nTip: The endpoint did not answer with GraphQL JSON. Check the endpoint URL."
        ),
        SyncError::Config { .. } => format!(
            "{sync_err}\n\nTip: Check your config file at {}",
            issuesync_core::config_file_path().map_or_else(
                |_| "~/.config/issuesync/config.toml".to_string(),
                |path| path.display().to_string()
            )
        ),
    }
}

/// Builds the `{kind, message}` report for structured output.
pub fn error_report(error: &Error) -> Option<ErrorReport> {
    classified(error).map(SyncError::report)
}
