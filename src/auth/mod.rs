//
//  project-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Attaches credentials to outgoing requests.
//!
//! ## Supported Authentication Methods
//!
//! - **No authentication**: for local test servers and mocks.
//! - **Bearer token**: a pre-issued access token sent as `Authorization: Bearer`.
//! - **Basic authentication**: username/password, used by service-broker deployments.
//!
//! Tokens are used as given; obtaining or refreshing them is the caller's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use project_sdk::auth::Authenticator;
//!
//! // Read PROJECT_AUTH_TYPE / PROJECT_BEARER_TOKEN / ... from the environment
//! let auth = Authenticator::from_env("project")?;
//! # Ok::<(), project_sdk::api::common::ApiError>(())
//! ```

use std::fmt;

use reqwest::RequestBuilder;

use crate::api::common::{ApiError, ApiResult};

/// Credentials applied to every request sent by a client.
#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    NoAuth,
    BearerToken(String),
    Basic { username: String, password: String },
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secrets
        match self {
            Self::NoAuth => f.write_str("NoAuth"),
            Self::BearerToken(_) => f.write_str("BearerToken(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

impl Authenticator {
    /// Applies the credentials to a request.
    ///
    /// # Parameters
    ///
    /// * `request` - The request builder to decorate
    ///
    /// # Returns
    ///
    /// The builder with an `Authorization` header set, or unchanged for
    /// [`Authenticator::NoAuth`].
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::NoAuth => request,
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }

    /// Short name of the authentication scheme, as used in config files.
    pub fn auth_type(&self) -> &'static str {
        match self {
            Self::NoAuth => "noauth",
            Self::BearerToken(_) => "bearertoken",
            Self::Basic { .. } => "basic",
        }
    }

    /// Reads credentials for `service_name` from the process environment.
    ///
    /// See [`Authenticator::from_env_with`] for the variables consulted.
    pub fn from_env(service_name: &str) -> ApiResult<Self> {
        Self::from_env_with(service_name, |key| std::env::var(key).ok())
    }

    /// Reads credentials for `service_name` through `lookup`.
    ///
    /// The service name is upper-cased and `-` is replaced with `_` to form
    /// the prefix. With the prefix `PROJECT`, the variables are:
    ///
    /// - `PROJECT_AUTH_TYPE`: `noauth`, `bearertoken` or `basic` (any case)
    /// - `PROJECT_BEARER_TOKEN`
    /// - `PROJECT_USERNAME` / `PROJECT_PASSWORD`
    ///
    /// When no auth type is given but a bearer token is, bearer
    /// authentication is used.
    ///
    /// # Errors
    ///
    /// [`ApiError::Config`] when nothing is configured, when the auth type is
    /// unknown, or when the selected scheme is missing a required value.
    pub fn from_env_with<F>(service_name: &str, lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.to_uppercase().replace('-', "_");
        let get = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}")).filter(|value| !value.is_empty())
        };

        let token = get("BEARER_TOKEN");
        let auth_type = match get("AUTH_TYPE") {
            Some(value) => value,
            None if token.is_some() => "bearertoken".to_string(),
            None => {
                return Err(ApiError::Config(format!(
                    "no credentials configured; set {prefix}_AUTH_TYPE"
                )))
            }
        };

        Self::from_parts(
            &auth_type,
            token,
            get("USERNAME"),
            get("PASSWORD"),
        )
        .map_err(|e| match e {
            ApiError::Config(msg) => ApiError::Config(format!("{prefix}_AUTH_TYPE: {msg}")),
            other => other,
        })
    }

    /// Builds an authenticator from an auth type name and its values.
    ///
    /// # Errors
    ///
    /// [`ApiError::Config`] for an unknown type or a missing value.
    pub fn from_parts(
        auth_type: &str,
        bearer_token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> ApiResult<Self> {
        match auth_type.to_lowercase().as_str() {
            "noauth" | "none" => Ok(Self::NoAuth),
            "bearertoken" | "bearer" => bearer_token
                .map(Self::BearerToken)
                .ok_or_else(|| ApiError::Config("bearer token authentication needs a token".into())),
            "basic" => match (username, password) {
                (Some(username), Some(password)) => Ok(Self::Basic { username, password }),
                _ => Err(ApiError::Config(
                    "basic authentication needs a username and a password".into(),
                )),
            },
            other => Err(ApiError::Config(format!("unsupported authentication type '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_noauth_from_env() {
        let auth = Authenticator::from_env_with("project", lookup(&[("PROJECT_AUTH_TYPE", "noAuth")]));
        assert_eq!(auth.unwrap(), Authenticator::NoAuth);
    }

    #[test]
    fn test_bearer_inferred_from_token() {
        let auth =
            Authenticator::from_env_with("project", lookup(&[("PROJECT_BEARER_TOKEN", "abc")]));
        assert_eq!(auth.unwrap(), Authenticator::BearerToken("abc".into()));
    }

    #[test]
    fn test_basic_requires_password() {
        let err = Authenticator::from_env_with(
            "project",
            lookup(&[("PROJECT_AUTH_TYPE", "basic"), ("PROJECT_USERNAME", "me")]),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Config(ref m) if m.contains("PROJECT_AUTH_TYPE")));
    }

    #[test]
    fn test_missing_credentials_is_error() {
        let err = Authenticator::from_env_with("project", lookup(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_unknown_auth_type() {
        let err =
            Authenticator::from_env_with("project", lookup(&[("PROJECT_AUTH_TYPE", "iam")])).unwrap_err();
        assert!(err.to_string().contains("unsupported authentication type 'iam'"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let auth = Authenticator::Basic {
            username: "me".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", auth);
        assert!(printed.contains("me"));
        assert!(!printed.contains("hunter2"));
        assert!(!format!("{:?}", Authenticator::BearerToken("s3cret".into())).contains("s3cret"));
    }
}
