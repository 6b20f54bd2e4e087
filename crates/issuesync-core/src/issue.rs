// SPDX-License-Identifier: Apache-2.0

//! Issue domain types.

use std::fmt;

use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec::{calendar_date, optional_calendar_date};

/// Server-assigned issue identifier.
///
/// Opaque to the client; servers may use numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IssueId {
    /// Numeric id.
    Int(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueId::Int(n) => write!(f, "{n}"),
            IssueId::Text(s) => f.write_str(s),
        }
    }
}

/// A persisted ticket as returned by the `issueList` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Issue {
    /// Server-assigned unique identifier.
    pub id: IssueId,
    /// Issue title.
    pub title: String,
    /// Responsible person; used as the filter key.
    pub owner: String,
    /// Server-defined status (e.g. "Open", "Assigned", "Closed").
    pub status: String,
    /// Effort estimate, as stored by the server.
    #[serde(default)]
    pub effort: Option<i64>,
    /// Creation date, stamped by the server.
    #[serde(deserialize_with = "calendar_date")]
    pub created: NaiveDate,
    /// Optional due date.
    #[serde(default, deserialize_with = "optional_calendar_date")]
    pub due: Option<NaiveDate>,
}

/// A pre-persistence issue payload, sent as the `issue` variable of `issueAdd`.
///
/// Nothing is validated locally; the server is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct IssueDraft {
    /// Issue title.
    pub title: String,
    /// Responsible person.
    pub owner: String,
    /// Effort estimate; absent when the user input did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<i64>,
    /// Optional due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl IssueDraft {
    /// Builds a draft from raw text inputs.
    ///
    /// `effort_text` is parsed leniently: an optional sign followed by the
    /// leading run of ASCII digits. Input without leading digits yields no
    /// effort.
    #[must_use]
    pub fn from_input(title: &str, owner: &str, effort_text: &str) -> Self {
        Self {
            title: title.to_string(),
            owner: owner.to_string(),
            effort: parse_effort(effort_text),
            due: None,
        }
    }
}

/// Parses the leading integer of `text`, ignoring surrounding whitespace.
fn parse_effort(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// The active owner-name filter.
///
/// An empty substring means no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    owner_substring: String,
    needle: String,
}

impl FilterState {
    /// Creates a filter for the given owner substring.
    #[must_use]
    pub fn new(owner_substring: &str) -> Self {
        Self {
            owner_substring: owner_substring.to_string(),
            needle: owner_substring.to_lowercase(),
        }
    }

    /// The substring as entered.
    #[must_use]
    pub fn owner_substring(&self) -> &str {
        &self.owner_substring
    }

    /// Returns true when the filter accepts every issue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner_substring.is_empty()
    }

    /// Case-insensitive substring match against the issue owner.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.is_empty() || issue.owner.to_lowercase().contains(&self.needle)
    }
}
