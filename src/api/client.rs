//
//  project-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Projects API
//!
//! This module provides [`ProjectClient`], the single HTTP entry point used
//! by every endpoint module, and [`ApiRequest`], the description of one
//! call that those modules build.
//!
//! ## Features
//!
//! - Percent-encoded path parameters, validated before any I/O
//! - Optional query parameters and headers sent only when set
//! - Authentication header injection
//! - Optional gzip response compression
//! - Optional exponential-backoff retries for 429/5xx and connection errors
//! - Request/response logging through `tracing`

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use backon::{ExponentialBuilder, Retryable};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::common::{format_api_error, ApiError, ApiResult, DetailedResponse};
use crate::auth::Authenticator;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_JSON_PATCH: &str = "application/json-patch+json";

/// Retry policy for transient failures.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: usize,
    /// Upper bound for the delay between two attempts.
    pub max_interval: Duration,
    /// Delay before the first retry.
    pub min_interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: crate::DEFAULT_MAX_RETRIES,
            max_interval: Duration::from_secs(crate::DEFAULT_RETRY_INTERVAL_SECS),
            min_interval: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: usize, max_interval: Duration) -> Self {
        Self {
            max_retries,
            max_interval,
            ..Self::default()
        }
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_interval.min(self.max_interval))
            .with_max_delay(self.max_interval)
            .with_max_times(self.max_retries)
            .with_jitter()
    }
}

/// Settings used to build a [`ProjectClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub service_url: String,
    pub authenticator: Authenticator,
    pub default_headers: BTreeMap<String, String>,
    pub enable_gzip: bool,
    pub retry: Option<RetryConfig>,
    pub timeout: Duration,
    pub disable_ssl_verification: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            service_url: crate::DEFAULT_SERVICE_URL.to_string(),
            authenticator: Authenticator::NoAuth,
            default_headers: BTreeMap::new(),
            enable_gzip: false,
            retry: None,
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            disable_ssl_verification: false,
        }
    }
}

impl ClientOptions {
    pub fn new(authenticator: Authenticator) -> Self {
        Self {
            authenticator,
            ..Self::default()
        }
    }

    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }
}

#[derive(Debug, Clone)]
enum RequestBody {
    Json(serde_json::Value),
    JsonPatch(serde_json::Value),
}

impl RequestBody {
    fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => CONTENT_TYPE_JSON,
            Self::JsonPatch(_) => CONTENT_TYPE_JSON_PATCH,
        }
    }

    fn value(&self) -> &serde_json::Value {
        match self {
            Self::Json(v) | Self::JsonPatch(v) => v,
        }
    }
}

/// Description of a single API call.
///
/// Paths are templates such as `/v1/projects/{id}/configs`, where every
/// `{name}` placeholder is filled from [`ApiRequest::path_param`]. Values
/// are inserted as whole, percent-encoded path segments.
///
/// # Example
///
/// ```rust
/// use project_sdk::api::client::ApiRequest;
/// use reqwest::Method;
///
/// let request = ApiRequest::new(Method::GET, "/v1/projects/{id}", "get_project")
///     .path_param("id", "a/b")
///     .query("complete", Some(true))
///     .query("exclude_configs", None::<bool>);
///
/// let url = request.resolve_url("https://example.com/api").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/api/v1/projects/a%2Fb?complete=true");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: &'static str,
    operation_id: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &'static str, operation_id: &'static str) -> Self {
        Self {
            method,
            path,
            operation_id,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter when `value` is `Some`.
    pub fn query<T: ToString>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// Adds a header when `value` is `Some`.
    pub fn header<T: ToString>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Adds per-call custom headers.
    pub fn headers<'a, I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Sets an `application/json` body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Sets an `application/json-patch+json` body.
    pub fn json_patch<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(RequestBody::JsonPatch(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Resolves the full request URL against `service_url`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] when `service_url` does not parse
    /// - [`ApiError::InvalidArgument`] when a path parameter is missing or
    ///   empty, or `service_url` cannot carry a path
    pub fn resolve_url(&self, service_url: &str) -> ApiResult<Url> {
        let mut url = Url::parse(service_url)?;

        let mut segments = Vec::new();
        for part in self.path.split('/').filter(|p| !p.is_empty()) {
            match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                Some(name) => {
                    let value = self
                        .path_params
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, v)| v.as_str())
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| {
                            ApiError::InvalidArgument(format!("'{name}' must be provided"))
                        })?;
                    segments.push(value);
                }
                None => segments.push(part),
            }
        }

        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidArgument(format!("service URL '{service_url}' cannot be a base"))
            })?
            .pop_if_empty()
            .extend(segments);

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }
}

/// HTTP client for the Projects API.
///
/// Cheap to share by reference; every endpoint method takes `&self`.
///
/// # Example
///
/// ```rust,no_run
/// use project_sdk::api::{ClientOptions, ProjectClient};
/// use project_sdk::api::projects::GetProjectOptions;
/// use project_sdk::auth::Authenticator;
///
/// # async fn run() -> project_sdk::api::common::ApiResult<()> {
/// let client = ProjectClient::new(ClientOptions::new(Authenticator::BearerToken("token".into())))?;
/// let project = client.get_project(&GetProjectOptions::new("my-project-id")).await?;
/// println!("{:?}", project.result.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http: Client,
    options: ClientOptions,
}

impl ProjectClient {
    /// Builds a client from `options`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidUrl`] for an unparsable service URL and
    /// [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(mut options: ClientOptions) -> ApiResult<Self> {
        options.service_url = normalize_service_url(&options.service_url)?;
        let http = build_http_client(&options)?;
        Ok(Self { http, options })
    }

    pub fn service_url(&self) -> &str {
        &self.options.service_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn set_service_url(&mut self, url: &str) -> ApiResult<()> {
        self.options.service_url = normalize_service_url(url)?;
        Ok(())
    }

    /// Replaces the headers sent with every request.
    pub fn set_default_headers(&mut self, headers: BTreeMap<String, String>) {
        self.options.default_headers = headers;
    }

    pub fn set_enable_gzip_compression(&mut self, enable: bool) -> ApiResult<()> {
        self.options.enable_gzip = enable;
        self.rebuild()
    }

    pub fn enable_retries(&mut self, max_retries: usize, max_interval: Duration) {
        self.options.retry = Some(RetryConfig::new(max_retries, max_interval));
    }

    pub fn disable_retries(&mut self) {
        self.options.retry = None;
    }

    fn rebuild(&mut self) -> ApiResult<()> {
        self.http = build_http_client(&self.options)?;
        Ok(())
    }

    /// Sends `request` and decodes a JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Any transport or status error, or [`ApiError::Decode`] when the body
    /// is empty or does not match `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<DetailedResponse<T>> {
        let raw = self.send(&request).await?;
        let result = serde_json::from_str(&raw.body)?;
        Ok(DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers,
            result,
        })
    }

    /// Sends `request` and ignores the response body.
    pub async fn send_empty(&self, request: ApiRequest) -> ApiResult<DetailedResponse<()>> {
        let raw = self.send(&request).await?;
        Ok(DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers,
            result: (),
        })
    }

    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let Some(retry) = &self.options.retry else {
            return self.execute(request).await;
        };

        let operation = || async move { self.execute(request).await };
        operation
            .retry(retry.backoff())
            .when(ApiError::is_retryable)
            .notify(|err, delay| {
                warn!(
                    operation = request.operation_id,
                    "Request failed, retrying in {:?}: {}", delay, err
                );
            })
            .await
    }

    async fn execute(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let url = request.resolve_url(&self.options.service_url)?;

        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .header(
                "X-Sdk-Analytics",
                format!(
                    "service_name={};service_version=V1;operation_id={}",
                    crate::DEFAULT_SERVICE_NAME,
                    request.operation_id
                ),
            );

        builder = builder.headers(to_header_map(
            self.options
                .default_headers
                .iter()
                .chain(request.headers.iter().map(|(k, v)| (k, v))),
        )?);

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, body.content_type())
                .body(serde_json::to_vec(body.value())?);
        }

        builder = self.options.authenticator.apply_to_request(builder);

        debug!(
            operation = request.operation_id,
            method = %request.method,
            url = %url,
            "Sending request"
        );
        let started = Instant::now();

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(
            operation = request.operation_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received response"
        );

        if !status.is_success() {
            return Err(format_api_error(status, &body));
        }

        Ok(RawResponse {
            status_code: status.as_u16(),
            headers,
            body,
        })
    }
}

struct RawResponse {
    status_code: u16,
    headers: HeaderMap,
    body: String,
}

/// Validates `url` and strips trailing slashes.
fn normalize_service_url(url: &str) -> ApiResult<String> {
    Url::parse(url)?;
    Ok(url.trim_end_matches('/').to_string())
}

fn build_http_client(options: &ClientOptions) -> ApiResult<Client> {
    Ok(Client::builder()
        .user_agent(format!("{}/{}", crate::PACKAGE_NAME, crate::VERSION))
        .gzip(options.enable_gzip)
        .timeout(options.timeout)
        .danger_accept_invalid_certs(options.disable_ssl_verification)
        .build()?)
}

fn to_header_map<'a, I>(headers: I) -> ApiResult<HeaderMap>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidArgument(format!("invalid header name '{name}'")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::InvalidArgument(format!("invalid value for header '{name}'")))?;
        // Per-call headers come after defaults and replace them.
        map.insert(name, value);
    }
    Ok(map)
}
