//
//  project-sdk
//  api/broker.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service-broker compatibility endpoints.
//!
//! The service also acts as an Open Service Broker so that the resource
//! controller can provision, update and deprovision instances. These calls
//! are normally made by the platform, not by end users.
//!
//! Every call accepts the optional broker headers `X-Broker-Api-Version`
//! and `X-Broker-Api-Originating-Identity` through [`BrokerHeaders`].

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, ProjectClient};
use super::common::{
    is_empty_slice, ApiError, ApiResult, DetailedResponse, JsonPatchOperation,
};

type JsonMap = serde_json::Map<String, serde_json::Value>;

const INSTANCE_PATH: &str = "/v2/service_instances/{instance_id}";
const INSTANCE_STATE_PATH: &str = "/bluemix_v1/service_instances/{instance_id}";

/// Optional Open Service Broker headers.
#[derive(Debug, Clone, Default)]
pub struct BrokerHeaders {
    pub api_version: Option<String>,
    pub originating_identity: Option<String>,
}

impl BrokerHeaders {
    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .header("X-Broker-Api-Version", self.api_version.as_deref())
            .header(
                "X-Broker-Api-Originating-Identity",
                self.originating_identity.as_deref(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(flatten)]
    pub additional_properties: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    #[serde(flatten)]
    pub additional_properties: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetLastOperationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Enablement state of a service instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlanMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogPlanMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogServiceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogServiceMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<CatalogPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub services: Vec<CatalogService>,
}

#[derive(Debug, Serialize)]
struct CreateInstanceBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    service_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    plan_id: Option<&'a str>,

    #[serde(skip_serializing_if = "is_empty_slice")]
    context: &'a [String],

    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a JsonMap>,

    #[serde(skip_serializing_if = "is_empty_slice")]
    previous_values: &'a [String],
}

#[derive(Debug, Serialize)]
struct InstanceStateBody<'a> {
    enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    initiator_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reason_code: Option<&'a JsonMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    plan_id: Option<&'a str>,

    #[serde(skip_serializing_if = "is_empty_slice")]
    previous_values: &'a [String],
}

#[derive(Debug, Clone, Default)]
pub struct CreateServiceInstanceOptions {
    pub instance_id: String,
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
    pub context: Vec<String>,
    pub parameters: Option<JsonMap>,
    pub previous_values: Vec<String>,
    pub accepts_incomplete: Option<bool>,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl CreateServiceInstanceOptions {
    pub fn new(
        instance_id: impl Into<String>,
        service_id: impl Into<String>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            service_id: Some(service_id.into()),
            plan_id: Some(plan_id.into()),
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, parameters: JsonMap) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_accepts_incomplete(mut self, accepts_incomplete: bool) -> Self {
        self.accepts_incomplete = Some(accepts_incomplete);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteServiceInstanceOptions {
    pub instance_id: String,
    pub plan_id: String,
    pub service_id: String,
    pub accepts_incomplete: Option<bool>,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl DeleteServiceInstanceOptions {
    pub fn new(
        instance_id: impl Into<String>,
        plan_id: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            plan_id: plan_id.into(),
            service_id: service_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceInstanceOptions {
    pub instance_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub accepts_incomplete: Option<bool>,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl UpdateServiceInstanceOptions {
    pub fn new(instance_id: impl Into<String>, json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            instance_id: instance_id.into(),
            json_patch_operation,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetLastOperationOptions {
    pub instance_id: String,
    pub operation: Option<String>,
    pub plan_id: Option<String>,
    pub service_id: Option<String>,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl GetLastOperationOptions {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReplaceServiceInstanceStateOptions {
    pub instance_id: String,
    pub enabled: bool,
    pub initiator_id: Option<String>,
    pub reason_code: Option<JsonMap>,
    pub plan_id: Option<String>,
    pub previous_values: Vec<String>,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl ReplaceServiceInstanceStateOptions {
    pub fn new(instance_id: impl Into<String>, enabled: bool) -> Self {
        Self {
            instance_id: instance_id.into(),
            enabled,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetServiceInstanceOptions {
    pub instance_id: String,
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl GetServiceInstanceOptions {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCatalogOptions {
    pub broker: BrokerHeaders,
    pub headers: BTreeMap<String, String>,
}

impl ProjectClient {
    /// Provisions a service instance.
    pub async fn create_service_instance(
        &self,
        options: &CreateServiceInstanceOptions,
    ) -> ApiResult<DetailedResponse<CreateResult>> {
        let request = ApiRequest::new(Method::PUT, INSTANCE_PATH, "create_service_instance")
            .path_param("instance_id", &options.instance_id)
            .query("accepts_incomplete", options.accepts_incomplete)
            .headers(&options.headers);
        let request = options.broker.apply(request).json(&CreateInstanceBody {
            service_id: options.service_id.as_deref(),
            plan_id: options.plan_id.as_deref(),
            context: &options.context,
            parameters: options.parameters.as_ref(),
            previous_values: &options.previous_values,
        })?;
        self.send_json(request).await
    }

    /// Deprovisions a service instance.
    pub async fn delete_service_instance(
        &self,
        options: &DeleteServiceInstanceOptions,
    ) -> ApiResult<DetailedResponse<DeleteResult>> {
        if options.plan_id.is_empty() || options.service_id.is_empty() {
            return Err(ApiError::InvalidArgument(
                "'plan_id' and 'service_id' must be provided".into(),
            ));
        }

        let request = ApiRequest::new(Method::DELETE, INSTANCE_PATH, "delete_service_instance")
            .path_param("instance_id", &options.instance_id)
            .query("plan_id", Some(&options.plan_id))
            .query("service_id", Some(&options.service_id))
            .query("accepts_incomplete", options.accepts_incomplete)
            .headers(&options.headers);
        self.send_json(options.broker.apply(request)).await
    }

    pub async fn update_service_instance(
        &self,
        options: &UpdateServiceInstanceOptions,
    ) -> ApiResult<DetailedResponse<UpdateResult>> {
        let request = ApiRequest::new(Method::PATCH, INSTANCE_PATH, "update_service_instance")
            .path_param("instance_id", &options.instance_id)
            .query("accepts_incomplete", options.accepts_incomplete)
            .headers(&options.headers);
        let request = options
            .broker
            .apply(request)
            .json_patch(&options.json_patch_operation)?;
        self.send_json(request).await
    }

    /// Polls the state of an asynchronous broker operation.
    pub async fn get_last_operation(
        &self,
        options: &GetLastOperationOptions,
    ) -> ApiResult<DetailedResponse<GetLastOperationResult>> {
        let request = ApiRequest::new(
            Method::GET,
            "/v2/service_instances/{instance_id}/last_operation",
            "get_last_operation",
        )
        .path_param("instance_id", &options.instance_id)
        .query("operation", options.operation.as_deref())
        .query("plan_id", options.plan_id.as_deref())
        .query("service_id", options.service_id.as_deref())
        .headers(&options.headers);
        self.send_json(options.broker.apply(request)).await
    }

    /// Enables or disables a service instance.
    pub async fn replace_service_instance_state(
        &self,
        options: &ReplaceServiceInstanceStateOptions,
    ) -> ApiResult<DetailedResponse<BrokerResult>> {
        let request = ApiRequest::new(
            Method::PUT,
            INSTANCE_STATE_PATH,
            "replace_service_instance_state",
        )
        .path_param("instance_id", &options.instance_id)
        .headers(&options.headers);
        let request = options.broker.apply(request).json(&InstanceStateBody {
            enabled: options.enabled,
            initiator_id: options.initiator_id.as_deref(),
            reason_code: options.reason_code.as_ref(),
            plan_id: options.plan_id.as_deref(),
            previous_values: &options.previous_values,
        })?;
        self.send_json(request).await
    }

    pub async fn get_service_instance(
        &self,
        options: &GetServiceInstanceOptions,
    ) -> ApiResult<DetailedResponse<BrokerResult>> {
        let request = ApiRequest::new(Method::GET, INSTANCE_STATE_PATH, "get_service_instance")
            .path_param("instance_id", &options.instance_id)
            .headers(&options.headers);
        self.send_json(options.broker.apply(request)).await
    }

    /// Lists the services and plans offered by the broker.
    pub async fn get_catalog(
        &self,
        options: &GetCatalogOptions,
    ) -> ApiResult<DetailedResponse<CatalogResponse>> {
        let request =
            ApiRequest::new(Method::GET, "/v2/catalog", "get_catalog").headers(&options.headers);
        self.send_json(options.broker.apply(request)).await
    }
}
