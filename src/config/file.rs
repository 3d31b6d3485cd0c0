//
//  jira-fetcher
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Settings File
//!
//! Optional TOML file supplying connection values that the environment does
//! not set. It is looked up in the platform configuration directory:
//!
//! - **Linux**: `~/.config/jf/config.toml`
//! - **macOS**: `~/Library/Application Support/jf/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\jf\config.toml`
//!
//! A missing file is not an error. Keys mirror the environment variables in
//! lowercase without the `JIRA_` prefix.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::{
    ConfigError, API_TOKEN_VAR, AUTH_TYPE_VAR, PASSWORD_VAR, PAT_VAR, URL_VAR, USERNAME_VAR,
};

/// Contents of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub jira: JiraSettings,
}

/// The `[jira]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub pat: Option<String>,
}

impl Settings {
    /// Loads the settings file from the default location.
    ///
    /// Returns defaults when the configuration directory cannot be resolved
    /// (e.g. `HOME` unset) or the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads and parses the settings file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&content).map_err(|source| ConfigError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Returns where the settings file would live, if a configuration
    /// directory can be determined.
    pub fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "jf").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Looks up a value by its environment variable name.
    pub fn get(&self, var: &str) -> Option<String> {
        let jira = &self.jira;
        let value = match var {
            URL_VAR => &jira.url,
            AUTH_TYPE_VAR => &jira.auth_type,
            USERNAME_VAR => &jira.username,
            PASSWORD_VAR => &jira.password,
            API_TOKEN_VAR => &jira.api_token,
            PAT_VAR => &jira.pat,
            _ => return None,
        };
        value.clone()
    }
}
