//
//  jira-fetcher
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for a single Jira instance: the base URL and one set
//! of credentials.
//!
//! ## Sources
//!
//! Values are resolved per key, first match wins:
//!
//! 1. Environment variables (`JIRA_URL`, `JIRA_AUTH_TYPE`, `JIRA_USERNAME`,
//!    `JIRA_PASSWORD`, `JIRA_API_TOKEN`, `JIRA_PAT`)
//! 2. The `[jira]` table of the settings file (see [`Settings`])
//!
//! `JIRA_AUTH_TYPE` defaults to `api_token` when neither source sets it.
//!
//! ## Example Settings File
//!
//! ```toml
//! [jira]
//! url = "https://jira.example.com"
//! auth_type = "pat"
//! pat = "NjM0NTY3ODkw..."
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use jira_fetcher::auth::AuthCredential;
//! use jira_fetcher::config::JiraConfig;
//!
//! let config = JiraConfig::new(
//!     "https://example.atlassian.net",
//!     AuthCredential::ApiToken {
//!         username: "me@example.com".to_string(),
//!         api_token: "token".to_string(),
//!     },
//! );
//! config.validate()?;
//! assert!(config.is_cloud());
//! # Ok::<(), jira_fetcher::config::ConfigError>(())
//! ```

mod file;

pub use file::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::{AuthCredential, AuthType};

/// Environment variable holding the Jira base URL.
pub const URL_VAR: &str = "JIRA_URL";
/// Environment variable selecting the authentication mode.
pub const AUTH_TYPE_VAR: &str = "JIRA_AUTH_TYPE";
/// Environment variable holding the username (basic and API token modes).
pub const USERNAME_VAR: &str = "JIRA_USERNAME";
/// Environment variable holding the password (basic mode).
pub const PASSWORD_VAR: &str = "JIRA_PASSWORD";
/// Environment variable holding the API token (API token mode).
pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
/// Environment variable holding the personal access token (PAT mode).
pub const PAT_VAR: &str = "JIRA_PAT";

/// Errors raised while building or validating configuration.
///
/// These are always fatal: a fetcher cannot be constructed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured URL is empty.
    #[error("Jira URL is required")]
    MissingUrl,

    /// `JIRA_URL` is unset in every source.
    #[error("JIRA_URL environment variable is required")]
    UrlNotSet,

    /// `JIRA_AUTH_TYPE` holds something other than `basic`, `api_token` or `pat`.
    #[error("Invalid JIRA_AUTH_TYPE: '{0}'. Must be one of: basic, api_token, pat")]
    InvalidAuthType(String),

    /// Credential fields required by `mode` are missing or empty.
    ///
    /// `fields` names every credential the mode needs, either as variable
    /// names (`JIRA_USERNAME`) or as human labels (`Username`), even when
    /// only one of them is missing.
    #[error(
        "{} required for {} authentication",
        join_fields(.fields),
        mode_label(.mode)
    )]
    MissingCredentials {
        mode: AuthType,
        fields: Vec<&'static str>,
    },

    /// The URL could not be turned into an http(s) API endpoint.
    #[error("Invalid Jira URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be created.
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path:?}: {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has the wrong shape.
    #[error("Invalid settings file {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn join_fields(fields: &[&'static str]) -> String {
    match fields {
        [] => "Credentials are".to_string(),
        [one] => format!("{} is", one),
        [init @ .., last] => format!("{} and {} are", init.join(", "), last),
    }
}

fn mode_label(mode: &AuthType) -> &'static str {
    match mode {
        AuthType::Basic => "basic",
        AuthType::ApiToken => "API token",
        AuthType::Pat => "PAT",
    }
}

/// Connection settings for one Jira instance.
///
/// Built once, never mutated, and owned by the fetcher that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraConfig {
    url: String,
    auth: AuthCredential,
}

impl JiraConfig {
    /// Creates a configuration without validating it.
    pub fn new(url: impl Into<String>, auth: AuthCredential) -> Self {
        Self {
            url: url.into(),
            auth,
        }
    }

    /// Builds a configuration from the process environment only.
    ///
    /// # Errors
    ///
    /// Fails with a message naming the missing or invalid variable, e.g.
    /// `JIRA_URL environment variable is required`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from the environment, falling back to the
    /// settings file for any variable the environment does not set.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Settings::load()?;
        Self::from_lookup(|name| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or_else(|| settings.get(name))
        })
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. The URL is checked first, then the
    /// auth type, then the credentials of the selected mode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let url = get(URL_VAR).ok_or(ConfigError::UrlNotSet)?;
        let auth_type = match get(AUTH_TYPE_VAR) {
            Some(value) => value.parse::<AuthType>()?,
            None => AuthType::ApiToken,
        };

        let auth = match auth_type {
            AuthType::Basic => {
                let (username, password) = require_pair(
                    auth_type,
                    (USERNAME_VAR, get(USERNAME_VAR)),
                    (PASSWORD_VAR, get(PASSWORD_VAR)),
                )?;
                AuthCredential::Basic { username, password }
            }
            AuthType::ApiToken => {
                let (username, api_token) = require_pair(
                    auth_type,
                    (USERNAME_VAR, get(USERNAME_VAR)),
                    (API_TOKEN_VAR, get(API_TOKEN_VAR)),
                )?;
                AuthCredential::ApiToken {
                    username,
                    api_token,
                }
            }
            AuthType::Pat => {
                let token = get(PAT_VAR).ok_or(ConfigError::MissingCredentials {
                    mode: auth_type,
                    fields: vec![PAT_VAR],
                })?;
                AuthCredential::Pat { token }
            }
        };

        Ok(Self { url, auth })
    }

    /// Checks that the URL and every credential field of the selected mode
    /// are present and non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        let blank = |s: &str| s.trim().is_empty();
        let missing: Vec<&'static str> = match &self.auth {
            AuthCredential::Basic { username, password } if blank(username) || blank(password) => {
                vec!["Username", "password"]
            }
            AuthCredential::ApiToken {
                username,
                api_token,
            } if blank(username) || blank(api_token) => vec!["Username", "API token"],
            AuthCredential::Pat { token } if blank(token) => vec!["Personal Access Token (PAT)"],
            _ => Vec::new(),
        };

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingCredentials {
                mode: self.auth.auth_type(),
                fields: missing,
            })
        }
    }

    /// The base URL as configured.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured credentials.
    pub fn auth(&self) -> &AuthCredential {
        &self.auth
    }

    /// The selected authentication mode.
    pub fn auth_type(&self) -> AuthType {
        self.auth.auth_type()
    }

    /// True for Atlassian-hosted instances (`*.atlassian.net`).
    pub fn is_cloud(&self) -> bool {
        self.url.contains("atlassian.net")
    }

    /// Browse link for an issue, e.g. `https://jira.example.com/browse/PROJ-1`.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.url.trim_end_matches('/'), key)
    }
}

fn require_pair(
    mode: AuthType,
    first: (&'static str, Option<String>),
    second: (&'static str, Option<String>),
) -> Result<(String, String), ConfigError> {
    match (first.1, second.1) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ConfigError::MissingCredentials {
            mode,
            fields: vec![first.0, second.0],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_cloud_api_token() {
        let config = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.atlassian.net"),
            ("JIRA_AUTH_TYPE", "api_token"),
            ("JIRA_USERNAME", "test_user"),
            ("JIRA_API_TOKEN", "test_token"),
        ]))
        .unwrap();

        assert_eq!(config.url(), "https://example.atlassian.net");
        assert_eq!(config.auth_type(), AuthType::ApiToken);
        assert_eq!(config.auth().username(), Some("test_user"));
        assert!(config.is_cloud());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enterprise_basic() {
        let config = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://jira.enterprise.com"),
            ("JIRA_AUTH_TYPE", "basic"),
            ("JIRA_USERNAME", "test_user"),
            ("JIRA_PASSWORD", "test_password"),
        ]))
        .unwrap();

        assert_eq!(
            config.auth(),
            &AuthCredential::Basic {
                username: "test_user".to_string(),
                password: "test_password".to_string(),
            }
        );
        assert!(!config.is_cloud());
    }

    #[test]
    fn test_enterprise_pat() {
        let config = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://jira.enterprise.com"),
            ("JIRA_AUTH_TYPE", "pat"),
            ("JIRA_PAT", "test_pat"),
        ]))
        .unwrap();

        assert_eq!(
            config.auth(),
            &AuthCredential::Pat {
                token: "test_pat".to_string()
            }
        );
        assert!(!config.is_cloud());
    }

    #[test]
    fn test_missing_url() {
        let err = JiraConfig::from_lookup(lookup(&[("JIRA_AUTH_TYPE", "api_token")])).unwrap_err();
        assert_eq!(err.to_string(), "JIRA_URL environment variable is required");
    }

    #[test]
    fn test_invalid_auth_type() {
        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "invalid"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Invalid JIRA_AUTH_TYPE"));
    }

    #[test]
    fn test_missing_credentials_name_the_variables() {
        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "api_token"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "JIRA_USERNAME and JIRA_API_TOKEN are required for API token authentication"
        );

        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "basic"),
        ]))
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("JIRA_USERNAME and JIRA_PASSWORD are required"));

        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "pat"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "JIRA_PAT is required for PAT authentication");
    }

    #[test]
    fn test_partial_credentials_name_the_pair() {
        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "basic"),
            ("JIRA_USERNAME", "someone"),
            ("JIRA_PASSWORD", "   "),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "JIRA_USERNAME and JIRA_PASSWORD are required for basic authentication"
        );

        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.com"),
            ("JIRA_AUTH_TYPE", "api_token"),
            ("JIRA_USERNAME", "someone"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "JIRA_USERNAME and JIRA_API_TOKEN are required for API token authentication"
        );
    }

    #[test]
    fn test_auth_type_defaults_to_api_token() {
        let config = JiraConfig::from_lookup(lookup(&[
            ("JIRA_URL", "https://example.atlassian.net"),
            ("JIRA_USERNAME", "u"),
            ("JIRA_API_TOKEN", "t"),
        ]))
        .unwrap();
        assert_eq!(config.auth_type(), AuthType::ApiToken);
    }

    #[test]
    fn test_validate() {
        let config = JiraConfig::new(
            "",
            AuthCredential::Pat {
                token: "t".to_string(),
            },
        );
        assert_eq!(config.validate().unwrap_err().to_string(), "Jira URL is required");

        let config = JiraConfig::new(
            "https://jira.example.com",
            AuthCredential::Basic {
                username: String::new(),
                password: String::new(),
            },
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Username and password are required for basic authentication"
        );

        let config = JiraConfig::new(
            "https://jira.example.com",
            AuthCredential::ApiToken {
                username: "u".to_string(),
                api_token: String::new(),
            },
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Username and API token are required for API token authentication"
        );

        let config = JiraConfig::new(
            "https://jira.example.com",
            AuthCredential::Basic {
                username: "u".to_string(),
                password: String::new(),
            },
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Username and password are required for basic authentication"
        );

        let config = JiraConfig::new(
            "https://jira.example.com",
            AuthCredential::Pat {
                token: String::new(),
            },
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Personal Access Token (PAT) is required for PAT authentication"
        );
    }

    #[test]
    fn test_browse_url() {
        let config = JiraConfig::new(
            "https://jira.example.com/",
            AuthCredential::Pat {
                token: "t".to_string(),
            },
        );
        assert_eq!(
            config.browse_url("PROJ-1"),
            "https://jira.example.com/browse/PROJ-1"
        );
    }
}
