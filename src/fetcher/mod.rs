//
//  jira-fetcher
//  fetcher/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Issue Fetcher
//!
//! [`JiraFetcher`] turns remote issues into [`Document`]s. It owns the
//! configuration, an [`IssueTracker`] and a [`TextCleaner`], and adds no
//! state of its own: every operation awaits its remote calls one after the
//! other and returns the first error untouched.
//!
//! ## Document Layout
//!
//! ```text
//! Issue: PROJ-123
//! Title: Test Issue Summary
//! Type: Task
//! Status: In Progress
//! Priority: Medium
//!
//! Description:
//! Test Description
//!
//! Comments:
//! 2024-01-01 - Comment User: This is a test comment
//! ```
//!
//! Field lines are omitted when the field is absent, and the description and
//! comment sections only appear when they have content.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jira_fetcher::fetcher::{JiraFetcher, DEFAULT_COMMENT_LIMIT};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetcher = JiraFetcher::from_env()?;
//! let doc = fetcher.get_issue("PROJ-123", DEFAULT_COMMENT_LIMIT).await?;
//! println!("{}", doc.content);
//! # Ok(())
//! # }
//! ```

mod document;

pub use document::*;

use serde_json::{Map, Value};

use crate::api::issues::{RawComment, RawIssue};
use crate::api::{ApiError, IssueTracker, JiraClient};
use crate::auth::AuthType;
use crate::config::{ConfigError, JiraConfig};
use crate::text::{MarkupCleaner, TextCleaner};
use crate::util::normalize_date;

/// Comments included by [`JiraFetcher::get_issue`] unless told otherwise.
pub const DEFAULT_COMMENT_LIMIT: u32 = 10;

/// Page size for searches unless told otherwise.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Field selector requesting every field in searches.
const ALL_FIELDS: &str = "*all";

/// Reads, searches, creates, updates and deletes issues as [`Document`]s.
///
/// `T` is the remote tracker and `C` the text cleaner. The defaults are the
/// HTTP client and the wiki-markup cleaner; tests substitute stand-ins via
/// [`JiraFetcher::with_parts`].
pub struct JiraFetcher<T = JiraClient, C = MarkupCleaner> {
    config: JiraConfig,
    tracker: T,
    cleaner: C,
}

impl JiraFetcher {
    /// Validates `config` and opens an HTTP client with its credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the missing field, or one describing
    /// why the client could not be created.
    pub fn new(config: JiraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracker = JiraClient::from_config(&config)?;
        Self::with_parts(config, tracker, MarkupCleaner::new())
    }

    /// Builds a fetcher from `JIRA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(JiraConfig::from_env()?)
    }

    /// Builds a fetcher from environment variables with the settings file as
    /// fallback.
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(JiraConfig::load()?)
    }
}

impl<T: IssueTracker, C: TextCleaner> JiraFetcher<T, C> {
    /// Assembles a fetcher from explicit parts after validating `config`.
    pub fn with_parts(config: JiraConfig, tracker: T, cleaner: C) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.is_cloud() && config.auth_type() == AuthType::Pat {
            tracing::warn!(
                "Personal access tokens are a Server/Data Center feature; {} looks like Jira Cloud",
                config.url()
            );
        }
        tracing::debug!(
            "Jira fetcher for {} ({}, {} auth)",
            config.url(),
            if config.is_cloud() { "cloud" } else { "server" },
            config.auth_type()
        );

        Ok(Self {
            config,
            tracker,
            cleaner,
        })
    }

    /// The configuration this fetcher was built from.
    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// The underlying remote tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Fetches one issue, including up to `comment_limit` comments.
    ///
    /// Comments are requested only when `comment_limit > 0` and are listed
    /// in the order the server returns them.
    pub async fn get_issue(&self, key: &str, comment_limit: u32) -> Result<Document, ApiError> {
        tracing::debug!("Fetching issue {}", key);
        let issue = self.tracker.issue(key).await?;

        let comments = if comment_limit > 0 {
            let page = self.tracker.issue_get_comments(key).await?;
            page.comments
                .into_iter()
                .take(comment_limit as usize)
                .collect()
        } else {
            Vec::new()
        };

        Ok(self.to_document(key, &issue, &comments))
    }

    /// Runs a JQL search and returns one document per issue, without
    /// comments, in the order the server returned them.
    pub async fn search_issues(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
        expand: Option<&str>,
    ) -> Result<Vec<Document>, ApiError> {
        tracing::debug!("Searching '{}' (start {}, max {})", jql, start_at, max_results);
        let results = self
            .tracker
            .jql(jql, ALL_FIELDS, start_at, max_results, expand)
            .await?;
        tracing::debug!(
            "Search returned {} of {} issues",
            results.issues.len(),
            results.total
        );

        Ok(results
            .issues
            .iter()
            .map(|issue| self.to_document(&issue.key, issue, &[]))
            .collect())
    }

    /// Searches with the first page and no expand directive.
    pub async fn search(&self, jql: &str) -> Result<Vec<Document>, ApiError> {
        self.search_issues(jql, 0, DEFAULT_MAX_RESULTS, None).await
    }

    /// Lists a project's issues, newest first.
    pub async fn get_project_issues(
        &self,
        project_key: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<Vec<Document>, ApiError> {
        let jql = format!("project = {} ORDER BY created DESC", project_key);
        self.search_issues(&jql, start_at, max_results, None).await
    }

    /// Creates an issue and returns it as re-fetched from the server.
    pub async fn create_issue(&self, issue: &NewIssue) -> Result<Document, ApiError> {
        let fields = issue.to_fields();
        let created = self.tracker.issue_create(&fields).await?;
        tracing::debug!("Created issue {}", created.key);
        self.get_issue(&created.key, 0).await
    }

    /// Applies `fields` verbatim to an issue and returns it as re-fetched
    /// from the server.
    pub async fn update_issue(
        &self,
        key: &str,
        fields: &Map<String, Value>,
    ) -> Result<Document, ApiError> {
        self.tracker.issue_update(key, fields).await?;
        tracing::debug!("Updated issue {}", key);
        self.get_issue(key, 0).await
    }

    /// Deletes an issue. Returns `true` on success; failures are errors,
    /// never `false`.
    pub async fn delete_issue(&self, key: &str) -> Result<bool, ApiError> {
        self.tracker.delete_issue(key).await?;
        tracing::debug!("Deleted issue {}", key);
        Ok(true)
    }

    /// Cleans marked-up text. Absent or empty input yields an empty string
    /// without consulting the cleaner.
    pub fn clean_text(&self, raw: Option<&str>) -> String {
        match raw {
            Some(text) if !text.is_empty() => self.cleaner.clean(text),
            _ => String::new(),
        }
    }

    fn to_document(&self, key: &str, issue: &RawIssue, comments: &[RawComment]) -> Document {
        let fields = &issue.fields;
        let summary = fields.summary.as_deref();
        let issue_type = fields.issuetype_name();
        let status = fields.status_name();
        let priority = fields.priority_name();

        let mut lines = vec![format!("Issue: {}", key)];
        for (label, value) in [
            ("Title", summary),
            ("Type", issue_type),
            ("Status", status),
            ("Priority", priority),
        ] {
            if let Some(value) = value {
                lines.push(format!("{}: {}", label, value));
            }
        }

        let description = self.clean_text(fields.description.as_deref());
        if !description.is_empty() {
            lines.push(String::new());
            lines.push("Description:".to_string());
            lines.push(description);
        }

        if !comments.is_empty() {
            lines.push(String::new());
            lines.push("Comments:".to_string());
            for comment in comments {
                lines.push(format!(
                    "{} - {}: {}",
                    normalize_date(comment.created.as_deref().unwrap_or_default()),
                    comment.author_name(),
                    self.clean_text(comment.body.as_deref())
                ));
            }
        }

        let mut metadata = Map::new();
        metadata.insert("key".to_string(), Value::from(key));
        metadata.insert("title".to_string(), optional(summary));
        metadata.insert("type".to_string(), optional(issue_type));
        metadata.insert("status".to_string(), optional(status));
        metadata.insert("priority".to_string(), optional(priority));
        metadata.insert(
            "created_date".to_string(),
            fields
                .created
                .as_deref()
                .map(|created| Value::from(normalize_date(created)))
                .unwrap_or(Value::Null),
        );
        metadata.insert("link".to_string(), Value::from(self.config.browse_url(key)));

        Document::new(lines.join("\n"), metadata)
    }
}

fn optional(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}
