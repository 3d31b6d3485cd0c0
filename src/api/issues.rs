//
//  jira-fetcher
//  api/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Raw Jira issue types as they arrive over the wire.
//!
//! These mirror the subset of the Jira REST v2 schema that the fetcher reads.
//! Every field is optional: search results requested with `fields=*all`
//! still omit fields that are hidden on a project's screens, and a priority
//! scheme may be disabled entirely.
//!
//! # Example
//!
//! ```rust
//! use jira_fetcher::api::issues::RawIssue;
//!
//! let json = r#"{
//!     "key": "PROJ-123",
//!     "fields": {
//!         "summary": "Test Issue Summary",
//!         "issuetype": {"name": "Task"},
//!         "status": {"name": "In Progress"}
//!     }
//! }"#;
//!
//! let issue: RawIssue = serde_json::from_str(json).unwrap();
//! assert_eq!(issue.fields.status_name(), Some("In Progress"));
//! assert_eq!(issue.fields.priority_name(), None);
//! ```

use serde::{Deserialize, Serialize};

/// A single issue as returned by `GET /issue/{key}` or inside search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    /// Project-scoped key, e.g. `PROJ-123`.
    #[serde(default)]
    pub key: String,

    /// The issue's field values.
    #[serde(default)]
    pub fields: IssueFields,
}

/// Field values of a [`RawIssue`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    /// One-line title of the issue.
    #[serde(default)]
    pub summary: Option<String>,

    /// Issue type, e.g. `Task`, `Bug`, `Story`.
    #[serde(default)]
    pub issuetype: Option<NamedRef>,

    /// Workflow status, e.g. `In Progress`.
    #[serde(default)]
    pub status: Option<NamedRef>,

    /// Priority, e.g. `Medium`. Absent when the priority field is disabled.
    #[serde(default)]
    pub priority: Option<NamedRef>,

    /// Creation timestamp, e.g. `2024-01-01T10:00:00.000+0000`.
    #[serde(default)]
    pub created: Option<String>,

    /// Description in Jira wiki markup.
    #[serde(default)]
    pub description: Option<String>,
}

impl IssueFields {
    /// Returns the issue type name, if any.
    pub fn issuetype_name(&self) -> Option<&str> {
        self.issuetype.as_ref().map(|t| t.name.as_str())
    }

    /// Returns the status name, if any.
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.name.as_str())
    }

    /// Returns the priority name, if any.
    pub fn priority_name(&self) -> Option<&str> {
        self.priority.as_ref().map(|p| p.name.as_str())
    }
}

/// Any `{"name": ...}` reference (issue type, status, priority).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// A comment attached to an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub id: String,

    /// Comment text in Jira wiki markup.
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,

    #[serde(default)]
    pub author: Option<CommentAuthor>,
}

impl RawComment {
    /// Display name of the author, or `Unknown` for deleted/anonymous users.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.display_name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// The author of a [`RawComment`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

/// Response of `GET /issue/{key}/comment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

/// Response of `GET /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub issues: Vec<RawIssue>,

    #[serde(default, rename = "startAt")]
    pub start_at: u32,

    #[serde(default, rename = "maxResults")]
    pub max_results: u32,

    #[serde(default)]
    pub total: u32,
}

/// Response of `POST /issue`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub id: String,

    pub key: String,
}
