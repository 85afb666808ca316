//
//  project-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads client settings from a TOML file and the environment, and turns
//! them into [`ClientOptions`].
//!
//! ## Layering
//!
//! Later sources win:
//!
//! 1. Built-in defaults
//! 2. The config file
//! 3. `PROJECT_*` environment variables
//! 4. Command-line flags (applied by the CLI)
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/proj/config.toml`
//! - **macOS**: `~/Library/Application Support/proj/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\proj\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! service_url = "https://projects.api.test.cloud.ibm.com"
//! auth_type = "bearertoken"
//! bearer_token = "eyJhbGciOi..."
//! enable_gzip = true
//! enable_retries = true
//! max_retries = 4
//! retry_interval = 30
//!
//! [headers]
//! X-Request-Source = "nightly-sync"
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Key |
//! |----------|-----|
//! | `PROJECT_URL` | `service_url` |
//! | `PROJECT_AUTH_TYPE` | `auth_type` |
//! | `PROJECT_BEARER_TOKEN` | `bearer_token` |
//! | `PROJECT_USERNAME` / `PROJECT_PASSWORD` | `username` / `password` |
//! | `PROJECT_DISABLE_SSL` | `disable_ssl` |
//! | `PROJECT_ENABLE_GZIP` | `enable_gzip` |
//! | `PROJECT_ENABLE_RETRIES` | `enable_retries` |
//! | `PROJECT_MAX_RETRIES` | `max_retries` |
//! | `PROJECT_RETRY_INTERVAL` | `retry_interval` (seconds) |
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::common::{ApiError, ApiResult};
use crate::api::{ClientOptions, RetryConfig};
use crate::auth::Authenticator;

/// Client settings as stored in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_gzip: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_retries: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<usize>,

    /// Maximum delay between retries, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_interval: Option<u64>,

    /// Request timeout, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl ServiceConfig {
    /// Loads the config file from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the config file at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlays `PROJECT_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(crate::DEFAULT_SERVICE_NAME, |key| std::env::var(key).ok())
    }

    /// Overlays `<NAME>_*` variables read through `lookup`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a boolean or numeric value
    /// does not parse.
    pub fn apply_env_with<F>(&mut self, service_name: &str, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.to_uppercase().replace('-', "_");
        let get = |suffix: &str| -> Option<(String, String)> {
            let key = format!("{prefix}_{suffix}");
            lookup(&key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        };

        if let Some((_, v)) = get("URL") {
            self.service_url = Some(v);
        }
        if let Some((_, v)) = get("AUTH_TYPE") {
            self.auth_type = Some(v);
        }
        if let Some((_, v)) = get("BEARER_TOKEN") {
            self.bearer_token = Some(v);
        }
        if let Some((_, v)) = get("USERNAME") {
            self.username = Some(v);
        }
        if let Some((_, v)) = get("PASSWORD") {
            self.password = Some(v);
        }
        if let Some((k, v)) = get("DISABLE_SSL") {
            self.disable_ssl = Some(parse_bool(&k, &v)?);
        }
        if let Some((k, v)) = get("ENABLE_GZIP") {
            self.enable_gzip = Some(parse_bool(&k, &v)?);
        }
        if let Some((k, v)) = get("ENABLE_RETRIES") {
            self.enable_retries = Some(parse_bool(&k, &v)?);
        }
        if let Some((k, v)) = get("MAX_RETRIES") {
            self.max_retries = Some(parse_number(&k, &v)?);
        }
        if let Some((k, v)) = get("RETRY_INTERVAL") {
            self.retry_interval = Some(parse_number(&k, &v)?);
        }
        Ok(())
    }

    /// Resolves the authenticator described by this config.
    ///
    /// # Errors
    ///
    /// [`ApiError::Config`] when no credentials are configured or the
    /// configured ones are incomplete.
    pub fn authenticator(&self) -> ApiResult<Authenticator> {
        let auth_type = match (&self.auth_type, &self.bearer_token) {
            (Some(auth_type), _) => auth_type.as_str(),
            (None, Some(_)) => "bearertoken",
            (None, None) => {
                return Err(ApiError::Config(
                    "no credentials configured; set PROJECT_AUTH_TYPE or auth_type in the config file"
                        .into(),
                ))
            }
        };
        Authenticator::from_parts(
            auth_type,
            self.bearer_token.clone(),
            self.username.clone(),
            self.password.clone(),
        )
    }

    /// Builds client options from this config.
    pub fn client_options(&self) -> ApiResult<ClientOptions> {
        let mut options = ClientOptions::new(self.authenticator()?);

        if let Some(url) = &self.service_url {
            options.service_url = url.clone();
        }
        options.default_headers = self.headers.clone();
        options.enable_gzip = self.enable_gzip.unwrap_or(false);
        options.disable_ssl_verification = self.disable_ssl.unwrap_or(false);
        if let Some(timeout) = self.timeout {
            options.timeout = Duration::from_secs(timeout);
        }
        if self.enable_retries.unwrap_or(false) {
            options.retry = Some(RetryConfig::new(
                self.max_retries.unwrap_or(crate::DEFAULT_MAX_RETRIES),
                Duration::from_secs(
                    self.retry_interval
                        .unwrap_or(crate::DEFAULT_RETRY_INTERVAL_SECS),
                ),
            ));
        }
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{key} must be a boolean, got '{value}'"),
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{key} must be a non-negative integer, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = ServiceConfig {
            service_url: Some("https://file.example.com".into()),
            max_retries: Some(2),
            ..ServiceConfig::default()
        };
        config
            .apply_env_with(
                "project",
                env(&[
                    ("PROJECT_URL", "http://localhost:8080"),
                    ("PROJECT_AUTH_TYPE", "noAuth"),
                    ("PROJECT_ENABLE_RETRIES", "TRUE"),
                    ("PROJECT_RETRY_INTERVAL", "5"),
                ]),
            )
            .unwrap();

        assert_eq!(config.service_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.enable_retries, Some(true));
        assert_eq!(config.max_retries, Some(2));

        let options = config.client_options().unwrap();
        assert_eq!(options.authenticator, Authenticator::NoAuth);
        assert_eq!(
            options.retry,
            Some(RetryConfig::new(2, Duration::from_secs(5)))
        );
    }

    #[test]
    fn test_malformed_env_value_names_key() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_env_with("project", env(&[("PROJECT_ENABLE_GZIP", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("PROJECT_ENABLE_GZIP"));

        let err = config
            .apply_env_with("project", env(&[("PROJECT_MAX_RETRIES", "-1")]))
            .unwrap_err();
        assert!(err.to_string().contains("PROJECT_MAX_RETRIES"));
    }

    #[test]
    fn test_defaults_without_retries() {
        let config = ServiceConfig {
            auth_type: Some("noauth".into()),
            ..ServiceConfig::default()
        };
        let options = config.client_options().unwrap();
        assert_eq!(options.service_url, crate::DEFAULT_SERVICE_URL);
        assert!(options.retry.is_none());
        assert!(!options.enable_gzip);
    }

    #[test]
    fn test_missing_credentials() {
        let err = ServiceConfig::default().client_options().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_file_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(ServiceConfig::load_from(&path).unwrap(), ServiceConfig::default());

        let mut config = ServiceConfig {
            service_url: Some("https://example.com".into()),
            enable_gzip: Some(true),
            ..ServiceConfig::default()
        };
        config.headers.insert("X-Team".into(), "infra".into());
        config.save_to(&path).unwrap();

        assert_eq!(ServiceConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "enable_gzip = \"sometimes\"").unwrap();

        let err = ServiceConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
