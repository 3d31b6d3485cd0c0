//
//  jira-fetcher
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Layer
//!
//! The remote side of the fetcher.
//!
//! ## Architecture
//!
//! - [`IssueTracker`]: the capability the fetcher consumes. Six calls, no
//!   normalization, errors returned as [`ApiError`].
//! - [`client`]: [`JiraClient`], the HTTP implementation over Jira REST v2.
//! - [`issues`]: raw wire types (issues, comments, search pages).
//! - [`common`]: [`ApiError`] and error-body parsing.
//!
//! Tests substitute their own `IssueTracker` so that no network is needed.

/// HTTP implementation of [`IssueTracker`] for Jira Cloud and Server/DC.
pub mod client;

/// Error type and error-response parsing.
pub mod common;

/// Raw Jira response types.
pub mod issues;

pub use client::JiraClient;
pub use common::ApiError;

use async_trait::async_trait;
use serde_json::{Map, Value};

use issues::{CommentPage, CreatedIssue, RawIssue, SearchResults};

/// Remote issue-tracker capability.
///
/// Implementations perform exactly one remote call per method and surface
/// failures as [`ApiError`] without retrying.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches one issue by key.
    async fn issue(&self, key: &str) -> Result<RawIssue, ApiError>;

    /// Runs a JQL search returning at most `limit` issues starting at `start`.
    ///
    /// `fields` is the Jira field selector (`*all` for everything) and
    /// `expand` an optional expand directive such as `changelog`.
    async fn jql(
        &self,
        query: &str,
        fields: &str,
        start: u32,
        limit: u32,
        expand: Option<&str>,
    ) -> Result<SearchResults, ApiError>;

    /// Fetches the comments of an issue in the order the server keeps them.
    async fn issue_get_comments(&self, key: &str) -> Result<CommentPage, ApiError>;

    /// Creates an issue from a fields mapping.
    async fn issue_create(&self, fields: &Map<String, Value>) -> Result<CreatedIssue, ApiError>;

    /// Updates an issue's fields.
    async fn issue_update(&self, key: &str, fields: &Map<String, Value>) -> Result<(), ApiError>;

    /// Deletes an issue.
    async fn delete_issue(&self, key: &str) -> Result<(), ApiError>;
}
