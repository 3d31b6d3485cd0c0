//
//  jira-fetcher
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Jira Fetcher Library
//!
//! Fetches issues from Jira Cloud and Jira Server/Data Center and normalizes
//! them into plain-text [`Document`]s with structured metadata.
//!
//! ## Overview
//!
//! This library provides the core functionality for the `jf` CLI tool. It
//! reads issues, runs JQL searches, and creates, updates and deletes issues,
//! always returning the affected issues in the same normalized shape.
//!
//! ## Features
//!
//! - **Three Authentication Modes**: basic (username/password), API token
//!   (Cloud) and personal access token (Server/DC)
//! - **Normalized Documents**: Jira wiki markup stripped, dates reduced to
//!   `YYYY-MM-DD`, browse links included
//! - **Pass-through Errors**: remote failures surface unchanged as [`ApiError`]
//! - **Pluggable Parts**: the HTTP client and the markup cleaner sit behind
//!   traits and can be replaced
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: The issue-tracker trait and its HTTP client
//! - [`auth`]: Authentication modes and credentials
//! - [`config`]: Environment and settings-file configuration
//! - [`fetcher`]: The fetcher and its document types
//! - [`text`]: Jira wiki-markup cleaning
//! - [`output`]: Output formatting (text, JSON)
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jira_fetcher::JiraFetcher;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Reads JIRA_URL, JIRA_AUTH_TYPE and the matching credentials
//! let fetcher = JiraFetcher::from_env()?;
//!
//! for doc in fetcher.get_project_issues("PROJ", 0, 10).await? {
//!     println!("{}", doc.content);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Remote issue-tracker access.
///
/// Defines the [`api::IssueTracker`] capability and the Jira REST v2 client
/// implementing it, along with the raw response types and [`ApiError`].
pub mod api;

/// Authentication modes and credentials.
pub mod auth;

/// Configuration loading and validation.
///
/// Configuration comes from `JIRA_*` environment variables, with an optional
/// TOML settings file filling in anything the environment leaves unset.
pub mod config;

pub mod fetcher;

/// Output formatting.
pub mod output;

/// Jira wiki-markup cleaning.
pub mod text;

pub mod util;

pub use api::ApiError;
pub use config::{ConfigError, JiraConfig};
pub use fetcher::{Document, JiraFetcher, NewIssue};

/// The application name used in CLI output and the settings directory.
pub const APP_NAME: &str = "jf";

/// The current version of the library, read from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes used by the CLI.
///
/// | Code | Constant | Description |
/// |------|----------|-------------|
/// | 0 | `SUCCESS` | Command completed successfully |
/// | 1 | `ERROR` | General error |
/// | 4 | `AUTH_ERROR` | Configuration missing or credentials rejected |
/// | 8 | `NOT_FOUND` | Issue not found |
/// | 32 | `RATE_LIMIT` | API rate limit exceeded |
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Configuration or authentication error.
    ///
    /// Required `JIRA_*` settings are missing or invalid, or Jira rejected
    /// the credentials.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The issue does not exist or the user does not have permission to
    /// see it.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;
}
