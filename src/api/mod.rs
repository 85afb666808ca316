//
//  project-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Projects REST API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication, retries and request handling
//! - [`common`]: Shared types (errors, pagination, patch operations)
//! - [`projects`]: Create, list, get, update and delete projects
//! - [`configs`]: Project configurations and their draft/install lifecycle
//! - [`notifications`]: Project events, Pulsar catalog events and Event Notifications integration
//! - [`broker`]: Service-broker compatibility endpoints
//! - [`health`]: Service health
//!
//! Endpoint modules add their operations to [`ProjectClient`] as methods, so a
//! single client value serves every call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use project_sdk::api::{ClientOptions, ProjectClient};
//! use project_sdk::api::projects::ListProjectsOptions;
//! use project_sdk::auth::Authenticator;
//!
//! # async fn run() -> project_sdk::api::common::ApiResult<()> {
//! let client = ProjectClient::new(
//!     ClientOptions::new(Authenticator::BearerToken("your-token".into()))
//!         .with_service_url("https://projects.api.test.cloud.ibm.com"),
//! )?;
//!
//! let page = client.list_projects(&ListProjectsOptions::new().with_limit(10)).await?;
//! println!("{} projects in total", page.result.total_count.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`common::ApiError`] variants, which map to common
//! HTTP error scenarios:
//!
//! - `AuthFailed`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

pub mod client;

pub mod common;

pub mod projects;

pub mod configs;

pub mod notifications;

pub mod broker;

pub mod health;

pub use client::{ApiRequest, ClientOptions, ProjectClient, RetryConfig};
