//
//  project-sdk
//  api/configs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project configuration types and operations.
//!
//! A configuration points at a deployable template (`locator_id`) and holds
//! the input values and environment settings used to deploy it. Every
//! configuration has an *active* version and, while being edited, a *draft*
//! version. Drafts are merged ("approved") or discarded, and active versions
//! are installed or uninstalled through Schematics jobs.
//!
//! # Lifecycle
//!
//! ```text
//! create/update ──▶ draft ──check──▶ draft (validated)
//!                     │
//!        merge / force_merge          discard
//!                     ▼                  ▼
//!                  active            (dropped)
//!                     │
//!          install / uninstall ──▶ Schematics job
//! ```
//!
//! # Notes
//!
//! - Enum values this client does not know about deserialize into an
//!   `Unknown` variant instead of failing the whole response.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, ProjectClient};
use super::common::{ApiError, ApiResult, DetailedResponse, JsonPatchOperation};

/// Which version of a configuration to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigVersion {
    Active,
    Draft,
    Mixed,
}

impl ConfigVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigVersion {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "mixed" => Ok(Self::Mixed),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown config version '{other}' (expected active, draft or mixed)"
            ))),
        }
    }
}

/// What to do with a configuration draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftAction {
    #[default]
    Merge,
    Discard,
}

impl DraftAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for DraftAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "discard" => Ok(Self::Discard),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown draft action '{other}' (expected merge or discard)"
            ))),
        }
    }
}

/// Kind of Schematics job to look up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchematicsJobAction {
    Install,
    #[default]
    Plan,
    Uninstall,
}

impl SchematicsJobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Plan => "plan",
            Self::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for SchematicsJobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchematicsJobAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "install" => Ok(Self::Install),
            "plan" => Ok(Self::Plan),
            "uninstall" => Ok(Self::Uninstall),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown job action '{other}' (expected install, plan or uninstall)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectConfigType {
    SchematicsBlueprint,
    TerraformTemplate,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputVariableType {
    Array,
    Boolean,
    Float,
    Int,
    Number,
    Object,
    Password,
    String,
    #[serde(other)]
    Unknown,
}

/// An input value supplied when creating a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVariableInput {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl InputVariableInput {
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }
}

/// An environment setting passed to the deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSettingItems {
    pub name: String,

    pub value: String,
}

/// Definition of a configuration, used for creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub locator_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<InputVariableInput>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setting: Vec<ConfigSettingItems>,
}

impl ProjectConfigInput {
    pub fn new(name: impl Into<String>, locator_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator_id: locator_id.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_input(mut self, input: Vec<InputVariableInput>) -> Self {
        self.input = input;
        self
    }

    pub fn with_setting(mut self, setting: Vec<ConfigSettingItems>) -> Self {
        self.setting = setting;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVariable {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InputVariableType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

/// A configuration as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator_id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectConfigType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<InputVariable>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<OutputValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setting: Vec<ConfigSettingItems>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigList {
    #[serde(default)]
    pub configs: Vec<ProjectConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteProjectConfigResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiffInputVariable {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InputVariableType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiffInput {
    #[serde(default)]
    pub input: Vec<ProjectConfigDiffInputVariable>,
}

/// Differences between the active and draft versions of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<ProjectConfigDiffInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<ProjectConfigDiffInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<ProjectConfigDiffInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetActionJobResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Cost estimate report. The schema is owned by the estimation backend, so
/// every field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCostEstimateResponse {
    #[serde(flatten)]
    pub additional_properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateConfigOptions {
    pub project_id: String,
    pub config: ProjectConfigInput,
    pub headers: BTreeMap<String, String>,
}

impl CreateConfigOptions {
    pub fn new(project_id: impl Into<String>, config: ProjectConfigInput) -> Self {
        Self {
            project_id: project_id.into(),
            config,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListConfigsOptions {
    pub project_id: String,
    pub version: Option<ConfigVersion>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl ListConfigsOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: ConfigVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetConfigOptions {
    pub project_id: String,
    pub id: String,
    pub version: Option<ConfigVersion>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl GetConfigOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: ConfigVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateConfigOptions {
    pub project_id: String,
    pub id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl UpdateConfigOptions {
    pub fn new(
        project_id: impl Into<String>,
        id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            json_patch_operation,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConfigOptions {
    pub project_id: String,
    pub id: String,
    pub draft_only: Option<bool>,
    pub destroy: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl DeleteConfigOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_draft_only(mut self, draft_only: bool) -> Self {
        self.draft_only = Some(draft_only);
        self
    }

    pub fn with_destroy(mut self, destroy: bool) -> Self {
        self.destroy = Some(destroy);
        self
    }
}

/// Identifies a configuration for calls that take no other parameters.
#[derive(Debug, Clone, Default)]
pub struct ConfigRefOptions {
    pub project_id: String,
    pub id: String,
    pub headers: BTreeMap<String, String>,
}

impl ConfigRefOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            headers: BTreeMap::new(),
        }
    }
}

pub type GetConfigDiffOptions = ConfigRefOptions;
pub type UninstallConfigOptions = ConfigRefOptions;

#[derive(Debug, Clone, Default)]
pub struct ForceMergeOptions {
    pub project_id: String,
    pub id: String,
    pub comment: Option<String>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl ForceMergeOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateDraftActionOptions {
    pub project_id: String,
    pub id: String,
    pub action: DraftAction,
    pub comment: Option<String>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl CreateDraftActionOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>, action: DraftAction) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            action,
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckConfigOptions {
    pub project_id: String,
    pub id: String,
    /// Sent as `X-Auth-Refresh-Token` so the service can act on the
    /// caller's behalf during validation.
    pub x_auth_refresh_token: Option<String>,
    pub version: Option<ConfigVersion>,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl CheckConfigOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.x_auth_refresh_token = Some(token.into());
        self
    }

    pub fn with_version(mut self, version: ConfigVersion) -> Self {
        self.version = Some(version);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstallConfigOptions {
    pub project_id: String,
    pub id: String,
    pub complete: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl InstallConfigOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetSchematicsJobOptions {
    pub project_id: String,
    pub id: String,
    pub action: SchematicsJobAction,
    /// Only consider jobs started after this Unix timestamp.
    pub since: Option<i64>,
    pub headers: BTreeMap<String, String>,
}

impl GetSchematicsJobOptions {
    pub fn new(
        project_id: impl Into<String>,
        id: impl Into<String>,
        action: SchematicsJobAction,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            action,
            ..Self::default()
        }
    }

    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCostEstimateOptions {
    pub project_id: String,
    pub id: String,
    pub version: Option<ConfigVersion>,
    pub headers: BTreeMap<String, String>,
}

impl GetCostEstimateOptions {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: ConfigVersion) -> Self {
        self.version = Some(version);
        self
    }
}

impl ProjectClient {
    pub async fn create_config(
        &self,
        options: &CreateConfigOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        if options.config.name.is_empty() || options.config.locator_id.is_empty() {
            return Err(ApiError::InvalidArgument(
                "'name' and 'locator_id' must be provided".into(),
            ));
        }

        let request = ApiRequest::new(Method::POST, "/v1/projects/{id}/configs", "create_config")
            .path_param("id", &options.project_id)
            .headers(&options.headers)
            .json(&options.config)?;
        self.send_json(request).await
    }

    pub async fn list_configs(
        &self,
        options: &ListConfigsOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfigList>> {
        let request = ApiRequest::new(Method::GET, "/v1/projects/{id}/configs", "list_configs")
            .path_param("id", &options.project_id)
            .query("version", options.version)
            .query("complete", options.complete)
            .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn get_config(
        &self,
        options: &GetConfigOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::GET,
            "/v1/projects/{id}/configs/{config_id}",
            "get_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("version", options.version)
        .query("complete", options.complete)
        .headers(&options.headers);
        self.send_json(request).await
    }

    /// Applies JSON patch operations to the draft of a configuration.
    pub async fn update_config(
        &self,
        options: &UpdateConfigOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::PATCH,
            "/v1/projects/{id}/configs/{config_id}",
            "update_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("complete", options.complete)
        .headers(&options.headers)
        .json_patch(&options.json_patch_operation)?;
        self.send_json(request).await
    }

    pub async fn delete_config(
        &self,
        options: &DeleteConfigOptions,
    ) -> ApiResult<DetailedResponse<DeleteProjectConfigResponse>> {
        let request = ApiRequest::new(
            Method::DELETE,
            "/v1/projects/{id}/configs/{config_id}",
            "delete_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("draft_only", options.draft_only)
        .query("destroy", options.destroy)
        .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn get_config_diff(
        &self,
        options: &GetConfigDiffOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfigDiff>> {
        let request = ApiRequest::new(
            Method::GET,
            "/v1/projects/{id}/configs/{config_id}/diff",
            "get_config_diff",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .headers(&options.headers);
        self.send_json(request).await
    }

    /// Merges the draft into the active version without waiting for checks.
    pub async fn force_merge(
        &self,
        options: &ForceMergeOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/configs/{config_id}/draft/force_merge",
            "force_merge",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("complete", options.complete)
        .headers(&options.headers)
        .json(&CommentBody {
            comment: options.comment.as_deref(),
        })?;
        self.send_json(request).await
    }

    /// Merges (approves) or discards the draft of a configuration.
    pub async fn create_draft_action(
        &self,
        options: &CreateDraftActionOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/configs/{config_id}/draft/{action}",
            "create_draft_action",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .path_param("action", options.action.as_str())
        .query("complete", options.complete)
        .headers(&options.headers)
        .json(&CommentBody {
            comment: options.comment.as_deref(),
        })?;
        self.send_json(request).await
    }

    /// Runs validation and a Schematics plan for a configuration.
    pub async fn check_config(
        &self,
        options: &CheckConfigOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/configs/{config_id}/check",
            "check_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("version", options.version)
        .query("complete", options.complete)
        .header("X-Auth-Refresh-Token", options.x_auth_refresh_token.as_deref())
        .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn install_config(
        &self,
        options: &InstallConfigOptions,
    ) -> ApiResult<DetailedResponse<ProjectConfig>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/configs/{config_id}/install",
            "install_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("complete", options.complete)
        .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn uninstall_config(
        &self,
        options: &UninstallConfigOptions,
    ) -> ApiResult<DetailedResponse<()>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/configs/{config_id}/uninstall",
            "uninstall_config",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .headers(&options.headers);
        self.send_empty(request).await
    }

    /// Looks up the latest Schematics job of the given kind.
    pub async fn get_schematics_job(
        &self,
        options: &GetSchematicsJobOptions,
    ) -> ApiResult<DetailedResponse<GetActionJobResponse>> {
        let request = ApiRequest::new(
            Method::GET,
            "/v1/projects/{id}/configs/{config_id}/job/{action}",
            "get_schematics_job",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .path_param("action", options.action.as_str())
        .query("since", options.since)
        .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn get_cost_estimate(
        &self,
        options: &GetCostEstimateOptions,
    ) -> ApiResult<DetailedResponse<GetCostEstimateResponse>> {
        let request = ApiRequest::new(
            Method::GET,
            "/v1/projects/{id}/configs/{config_id}/cost_estimate",
            "get_cost_estimate",
        )
        .path_param("id", &options.project_id)
        .path_param("config_id", &options.id)
        .query("version", options.version)
        .headers(&options.headers);
        self.send_json(request).await
    }
}
