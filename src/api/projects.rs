//
//  project-sdk
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project API types and operations.
//!
//! A project groups configurations (deployable infrastructure definitions)
//! under one resource group and location.
//!
//! # Operations
//!
//! | Method | HTTP |
//! |--------|------|
//! | [`ProjectClient::create_project`] | `POST /v1/projects` |
//! | [`ProjectClient::list_projects`] | `GET /v1/projects` |
//! | [`ProjectClient::projects_pager`] | repeated `GET /v1/projects` |
//! | [`ProjectClient::get_project`] | `GET /v1/projects/{id}` |
//! | [`ProjectClient::update_project`] | `PATCH /v1/projects/{id}` |
//! | [`ProjectClient::delete_project`] | `DELETE /v1/projects/{id}` |
//!
//! # Example
//!
//! ```rust,no_run
//! use project_sdk::api::projects::{CreateProjectOptions, ListProjectsOptions};
//! use project_sdk::api::ProjectClient;
//!
//! # async fn run(client: ProjectClient) -> project_sdk::api::common::ApiResult<()> {
//! let created = client
//!     .create_project(
//!         &CreateProjectOptions::new("Default", "us-south", "acme-network")
//!             .with_description("Shared network for acme"),
//!     )
//!     .await?;
//! println!("created {:?}", created.result.id);
//!
//! let everything = client
//!     .projects_pager(ListProjectsOptions::new().with_limit(50))?
//!     .get_all()
//!     .await?;
//! println!("{} projects", everything.len());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, ProjectClient};
use super::common::{
    is_empty_slice, ApiError, ApiResult, DetailedResponse, JsonPatchOperation, Page, PageSource,
    Pager, PaginationLink,
};
use super::configs::{ProjectConfig, ProjectConfigInput};

/// One page of the project listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponseSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PaginationLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<PaginationLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,

    #[serde(default)]
    pub projects: Vec<ProjectListItem>,
}

impl ProjectListResponseSchema {
    /// Cursor of the next page. `None` when the server sent no cursor or an
    /// empty one.
    pub fn next_start(&self) -> Option<&str> {
        self.next
            .as_ref()
            .and_then(|link| link.start.as_deref())
            .filter(|start| !start.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

/// Server-maintained information about a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cumulative_needs_attention_view: Vec<CumulativeNeedsAttention>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_needs_attention_view_err: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_notifications_crn: Option<String>,
}

/// An event on one of the project's configurations that needs attention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeNeedsAttention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetProjectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configs: Vec<ProjectConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

/// Result of a project patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateProjectBody<'a> {
    name: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,

    #[serde(skip_serializing_if = "is_empty_slice")]
    configs: &'a [ProjectConfigInput],
}

#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    pub resource_group: String,
    pub location: String,
    pub name: String,
    pub description: Option<String>,
    pub configs: Vec<ProjectConfigInput>,
    pub headers: BTreeMap<String, String>,
}

impl CreateProjectOptions {
    pub fn new(
        resource_group: impl Into<String>,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            resource_group: resource_group.into(),
            location: location.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_configs(mut self, configs: Vec<ProjectConfigInput>) -> Self {
        self.configs = configs;
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Parameters of the project listing.
///
/// `limit` must be between 1 and 100 when set; the server rejects other
/// values.
#[derive(Debug, Clone, Default)]
pub struct ListProjectsOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl ListProjectsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetProjectOptions {
    pub id: String,
    pub exclude_configs: Option<bool>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl GetProjectOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_exclude_configs(mut self, exclude_configs: bool) -> Self {
        self.exclude_configs = Some(exclude_configs);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectOptions {
    pub id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: BTreeMap<String, String>,
}

impl UpdateProjectOptions {
    pub fn new(id: impl Into<String>, json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            id: id.into(),
            json_patch_operation,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteProjectOptions {
    pub id: String,
    pub destroy: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl DeleteProjectOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Also destroy the resources deployed by the project's configurations.
    pub fn with_destroy(mut self, destroy: bool) -> Self {
        self.destroy = Some(destroy);
        self
    }
}

impl ProjectClient {
    /// Creates a project, optionally with initial configurations.
    pub async fn create_project(
        &self,
        options: &CreateProjectOptions,
    ) -> ApiResult<DetailedResponse<GetProjectResponse>> {
        if options.resource_group.is_empty() || options.location.is_empty() {
            return Err(ApiError::InvalidArgument(
                "'resource_group' and 'location' must be provided".into(),
            ));
        }
        if options.name.is_empty() {
            return Err(ApiError::InvalidArgument("'name' must be provided".into()));
        }

        let request = ApiRequest::new(Method::POST, "/v1/projects", "create_project")
            .query("resource_group", Some(&options.resource_group))
            .query("location", Some(&options.location))
            .headers(&options.headers)
            .json(&CreateProjectBody {
                name: &options.name,
                description: options.description.as_deref(),
                configs: &options.configs,
            })?;
        self.send_json(request).await
    }

    /// Fetches a single page of projects.
    pub async fn list_projects(
        &self,
        options: &ListProjectsOptions,
    ) -> ApiResult<DetailedResponse<ProjectListResponseSchema>> {
        let request = ApiRequest::new(Method::GET, "/v1/projects", "list_projects")
            .query("start", options.start.as_deref())
            .query("limit", options.limit)
            .query("complete", options.complete)
            .headers(&options.headers);
        self.send_json(request).await
    }

    /// Creates a [`Pager`] over all projects matching `options`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] when `options.start` is set; the pager
    /// owns the cursor.
    pub fn projects_pager(&self, options: ListProjectsOptions) -> ApiResult<ProjectsPager<'_>> {
        if options.start.as_deref().is_some_and(|start| !start.is_empty()) {
            return Err(ApiError::InvalidArgument(
                "the 'start' option should not be set".into(),
            ));
        }
        Ok(Pager::new(ProjectsPageSource {
            client: self,
            options,
        }))
    }

    pub async fn get_project(
        &self,
        options: &GetProjectOptions,
    ) -> ApiResult<DetailedResponse<GetProjectResponse>> {
        let request = ApiRequest::new(Method::GET, "/v1/projects/{id}", "get_project")
            .path_param("id", &options.id)
            .query("exclude_configs", options.exclude_configs)
            .query("complete", options.complete)
            .headers(&options.headers);
        self.send_json(request).await
    }

    /// Applies JSON patch operations to a project's name or description.
    pub async fn update_project(
        &self,
        options: &UpdateProjectOptions,
    ) -> ApiResult<DetailedResponse<ProjectUpdate>> {
        let request = ApiRequest::new(Method::PATCH, "/v1/projects/{id}", "update_project")
            .path_param("id", &options.id)
            .headers(&options.headers)
            .json_patch(&options.json_patch_operation)?;
        self.send_json(request).await
    }

    pub async fn delete_project(
        &self,
        options: &DeleteProjectOptions,
    ) -> ApiResult<DetailedResponse<()>> {
        let request = ApiRequest::new(Method::DELETE, "/v1/projects/{id}", "delete_project")
            .path_param("id", &options.id)
            .query("destroy", options.destroy)
            .headers(&options.headers);
        self.send_empty(request).await
    }
}

/// [`PageSource`] over the project listing.
///
/// Every list parameter except `start` stays fixed for the life of the pager.
#[derive(Debug)]
pub struct ProjectsPageSource<'c> {
    client: &'c ProjectClient,
    options: ListProjectsOptions,
}

pub type ProjectsPager<'c> = Pager<ProjectsPageSource<'c>>;

#[async_trait]
impl<'c> PageSource for ProjectsPageSource<'c> {
    type Item = ProjectListItem;

    async fn fetch_page(&self, start: Option<&str>) -> ApiResult<Page<ProjectListItem>> {
        let mut options = self.options.clone();
        options.start = start.map(String::from);

        let response = self.client.list_projects(&options).await?.result;
        let next = response.next_start().map(String::from);
        Ok(Page::new(response.projects, response.total_count, next))
    }
}
