//
//  project-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project SDK
//!
//! A typed client for the cloud Projects service, plus the `proj` command-line tool
//! built on top of it.
//!
//! ## Overview
//!
//! A *project* groups deployable *configurations* (infrastructure-as-code templates
//! with inputs, settings and lifecycle state). This library wraps the service's REST
//! endpoints as async methods on [`ProjectClient`], one method per operation, with
//! request options built as plain structs.
//!
//! ## Features
//!
//! - **Projects**: Create, list, get, update (JSON Patch) and delete
//! - **Configurations**: CRUD, diff, draft actions, validation, install/uninstall
//! - **Paging**: [`Pager`] walks the cursor-paged project list
//! - **Notifications**: Event notifications and the integration lifecycle
//! - **Broker**: Service-broker instance endpoints and the catalog
//! - **Transport**: Configurable authentication, gzip, retries and default headers
//!
//! ## Module Structure
//!
//! - [`api`]: Client, endpoint methods, models and pagination
//! - [`auth`]: Request authenticators
//! - [`config`]: Config file and environment loading
//! - [`output`]: Output formatting (Table, JSON, YAML)
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use project_sdk::{Authenticator, ClientOptions, ListProjectsOptions, ProjectClient};
//!
//! # async fn run() -> project_sdk::ApiResult<()> {
//! let auth = Authenticator::BearerToken("eyJhbGciOi...".into());
//! let client = ProjectClient::new(ClientOptions::new(auth))?;
//!
//! let mut pager = client.projects_pager(ListProjectsOptions::new().with_limit(10))?;
//! while pager.has_next() {
//!     for project in pager.get_next().await? {
//!         println!("{}", project.id.unwrap_or_default());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client, endpoint methods and models.
///
/// Every operation is an async method on [`ProjectClient`] returning a
/// [`DetailedResponse`](api::common::DetailedResponse).
pub mod api;

/// Request authenticators.
pub mod auth;

/// Configuration file management.
///
/// Settings are stored in platform-specific locations:
/// - Linux: `~/.config/proj/config.toml`
/// - macOS: `~/Library/Application Support/proj/config.toml`
/// - Windows: `%APPDATA%\proj\config\config.toml`
pub mod config;

/// Output formatting for the CLI.
pub mod output;

/// Command-line interface definitions.
///
/// Contains the `proj` commands and arguments defined using the clap derive API.
pub mod cli;

pub use api::common::{ApiError, ApiResult, DetailedResponse, JsonPatchOperation, Page, PageSource, Pager};
pub use api::projects::{ListProjectsOptions, ProjectsPager};
pub use api::{ClientOptions, ProjectClient, RetryConfig};
pub use auth::Authenticator;
pub use cli::Cli;
pub use config::ServiceConfig;

/// Name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "proj";

/// Package name, sent in the `User-Agent` header.
pub const PACKAGE_NAME: &str = "project-sdk";

/// Library version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default service endpoint.
pub const DEFAULT_SERVICE_URL: &str = "https://projects.api.test.cloud.ibm.com";

/// Service name used for `PROJECT_*` environment variables and analytics.
pub const DEFAULT_SERVICE_NAME: &str = "project";

/// Retry attempts after the first request, when retries are enabled.
pub const DEFAULT_MAX_RETRIES: usize = 4;

/// Upper bound on the delay between retries, in seconds.
pub const DEFAULT_RETRY_INTERVAL_SECS: u64 = 30;

/// Per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use project_sdk::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The service rejected the credentials (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested project, configuration or instance does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The service rate limit has been exceeded (429).
    pub const RATE_LIMIT: i32 = 32;
}
