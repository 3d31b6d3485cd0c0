//
//  jira-fetcher
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Jira accepts three mutually exclusive ways of authenticating:
//!
//! - **Basic**: Username and password. Server/Data Center only.
//! - **API token**: Atlassian account email plus an API token, sent as HTTP
//!   Basic credentials. Jira Cloud.
//! - **Personal Access Token (PAT)**: Bearer token. Server/Data Center 8.14+.
//!
//! [`AuthCredential`] carries exactly the fields of the selected mode, so a
//! PAT can never travel together with a password.
//!
//! ## Example
//!
//! ```rust
//! use jira_fetcher::auth::{AuthCredential, AuthType};
//!
//! let credential = AuthCredential::Pat { token: "secret".to_string() };
//! assert_eq!(credential.auth_type(), AuthType::Pat);
//! assert_eq!("api_token".parse::<AuthType>().unwrap(), AuthType::ApiToken);
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::RequestBuilder;

use crate::config::ConfigError;

/// The authentication mode selector, as spelled in `JIRA_AUTH_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// `basic`
    Basic,
    /// `api_token`
    ApiToken,
    /// `pat`
    Pat,
}

impl AuthType {
    /// Returns the configuration spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::ApiToken => "api_token",
            Self::Pat => "pat",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = ConfigError;

    /// Parses `basic`, `api_token` or `pat` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAuthType`] for any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "api_token" => Ok(Self::ApiToken),
            "pat" => Ok(Self::Pat),
            _ => Err(ConfigError::InvalidAuthType(s.to_string())),
        }
    }
}

/// Credentials for one of the three supported authentication modes.
///
/// # Variants
///
/// - `Basic`: username and password, sent as HTTP Basic.
/// - `ApiToken`: username (account email) and API token, sent as HTTP Basic.
/// - `Pat`: personal access token, sent as a Bearer token.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Username/password authentication.
    Basic {
        /// The Jira username.
        username: String,
        /// The user's password.
        password: String,
    },
    /// Atlassian Cloud API token authentication.
    ApiToken {
        /// The Atlassian account email.
        username: String,
        /// The API token generated in the account's security settings.
        api_token: String,
    },
    /// Personal Access Token for Jira Server/Data Center.
    Pat {
        /// The personal access token string.
        token: String,
    },
}

impl AuthCredential {
    /// Returns which mode this credential belongs to.
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::Basic { .. } => AuthType::Basic,
            Self::ApiToken { .. } => AuthType::ApiToken,
            Self::Pat { .. } => AuthType::Pat,
        }
    }

    /// Returns the username for the modes that have one.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Basic { username, .. } | Self::ApiToken { username, .. } => Some(username),
            Self::Pat { .. } => None,
        }
    }

    /// Applies the credential to an HTTP request.
    ///
    /// - `Basic` and `ApiToken` use HTTP Basic authentication
    /// - `Pat` uses Bearer token authentication
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::ApiToken {
                username,
                api_token,
            } => request.basic_auth(username, Some(api_token)),
            Self::Pat { token } => request.bearer_auth(token),
        }
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::ApiToken { username, .. } => f
                .debug_struct("ApiToken")
                .field("username", username)
                .field("api_token", &"***")
                .finish(),
            Self::Pat { .. } => f.debug_struct("Pat").field("token", &"***").finish(),
        }
    }
}
