// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # issuesync Core
//!
//! Client-side synchronization between a GraphQL issue-tracker API and an
//! in-memory issue collection.
//!
//! This crate provides:
//! - A GraphQL transport that classifies server-reported errors
//! - Date-aware decoding of response bodies
//! - An issue repository with owner filtering and reload-after-create
//! - Owner blacklisting
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use issuesync_core::{GraphQlClient, IssueDraft, IssueRepository, load_config};
//!
//! # async fn example() -> issuesync_core::Result<()> {
//! let config = load_config()?;
//! let client = Arc::new(GraphQlClient::new(&config.server)?);
//!
//! let mut repo = IssueRepository::new(client);
//! repo.load().await?;
//!
//! repo.create(&IssueDraft::from_input("Crash on save", "Alice", "3")).await?;
//!
//! repo.set_filter("ali");
//! for issue in repo.filtered_view() {
//!     println!("{} {}", issue.id, issue.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Date-aware JSON decoding
//! - [`graphql`] - GraphQL transport and error classification
//! - [`repository`] - Canonical issue collection
//! - [`blacklist`] - Owner blacklisting
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{ErrorKind, ErrorReport, SyncError};

/// Convenience Result type for issuesync operations.
///
/// This is equivalent to `std::result::Result<T, SyncError>`.
pub type Result<T> = std::result::Result<T, SyncError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, ServerConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Transport
// ============================================================================

pub use codec::{Value, decode};
pub use graphql::{GraphQlClient, GraphQlErrorEntry, GraphQlExecutor, GraphQlResponse};

// ============================================================================
// Domain
// ============================================================================

pub use blacklist::BlacklistService;
pub use issue::{FilterState, Issue, IssueDraft, IssueId};
pub use repository::IssueRepository;

// ============================================================================
// Modules
// ============================================================================

pub mod blacklist;
pub mod codec;
pub mod config;
pub mod error;
pub mod graphql;
pub mod issue;
pub mod repository;

#[cfg(test)]
mod test_support;
