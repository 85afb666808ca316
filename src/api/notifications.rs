//
//  project-sdk
//  api/notifications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project events, Pulsar catalog events and the Event Notifications
//! integration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, ProjectClient};
use super::common::{ApiError, ApiResult, DetailedResponse};

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// An event to record against a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub event: String,

    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonMap>,
}

impl NotificationEvent {
    pub fn new(event: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_triggered_by(mut self, triggered_by: impl Into<String>) -> Self {
        self.triggered_by = Some(triggered_by.into());
        self
    }

    pub fn with_action_url(mut self, action_url: impl Into<String>) -> Self {
        self.action_url = Some(action_url.into());
        self
    }

    pub fn with_data(mut self, data: JsonMap) -> Self {
        self.data = Some(data);
        self
    }
}

/// A stored project event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEventWithId {
    #[serde(flatten)]
    pub event: NotificationEvent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Outcome of recording one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEventWithStatus {
    #[serde(flatten)]
    pub event: NotificationEvent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<JsonMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostNotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<NotificationEventWithStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetNotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<NotificationEventWithId>,
}

/// A resource-catalog event delivered through Pulsar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulsarEventItems {
    pub event_type: String,

    pub timestamp: DateTime<Utc>,

    pub publisher: String,

    pub account_id: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_properties: Option<JsonMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(flatten)]
    pub additional_properties: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectNotificationsIntegrationPostResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectNotificationsIntegrationGetResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_names: Vec<String>,
}

/// The CloudEvent the service sent to Event Notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestNotificationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibmendefaultlong: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibmendefaultshort: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibmensourceid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specversion: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
struct NotificationsBody<'a> {
    notifications: &'a [NotificationEvent],
}

#[derive(Debug, Serialize)]
struct IntegrationBody<'a> {
    instance_crn: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    event_notifications_source_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
struct TestNotificationBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ibmendefaultlong: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ibmendefaultshort: Option<&'a str>,
}

/// Identifies a project for calls that take no other parameters.
#[derive(Debug, Clone, Default)]
pub struct ProjectRefOptions {
    pub id: String,
    pub headers: BTreeMap<String, String>,
}

impl ProjectRefOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostNotificationOptions {
    pub id: String,
    pub notifications: Vec<NotificationEvent>,
    pub headers: BTreeMap<String, String>,
}

impl PostNotificationOptions {
    pub fn new(id: impl Into<String>, notifications: Vec<NotificationEvent>) -> Self {
        Self {
            id: id.into(),
            notifications,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReceivePulsarCatalogEventsOptions {
    pub events: Vec<PulsarEventItems>,
    pub headers: BTreeMap<String, String>,
}

impl ReceivePulsarCatalogEventsOptions {
    pub fn new(events: Vec<PulsarEventItems>) -> Self {
        Self {
            events,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostEventNotificationsIntegrationOptions {
    pub id: String,
    pub instance_crn: String,
    pub description: Option<String>,
    pub event_notifications_source_name: Option<String>,
    pub enabled: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl PostEventNotificationsIntegrationOptions {
    pub fn new(id: impl Into<String>, instance_crn: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instance_crn: instance_crn.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.event_notifications_source_name = Some(name.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostTestEventNotificationOptions {
    pub id: String,
    pub ibmendefaultlong: Option<String>,
    pub ibmendefaultshort: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl PostTestEventNotificationOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_long_message(mut self, message: impl Into<String>) -> Self {
        self.ibmendefaultlong = Some(message.into());
        self
    }

    pub fn with_short_message(mut self, message: impl Into<String>) -> Self {
        self.ibmendefaultshort = Some(message.into());
        self
    }
}

const EVENT_PATH: &str = "/v1/projects/{id}/event";
const INTEGRATION_PATH: &str = "/v1/projects/{id}/integrations/event_notifications";

impl ProjectClient {
    /// Records events against a project.
    pub async fn post_notification(
        &self,
        options: &PostNotificationOptions,
    ) -> ApiResult<DetailedResponse<PostNotificationsResponse>> {
        let request = ApiRequest::new(Method::POST, EVENT_PATH, "post_notification")
            .path_param("id", &options.id)
            .headers(&options.headers)
            .json(&NotificationsBody {
                notifications: &options.notifications,
            })?;
        self.send_json(request).await
    }

    pub async fn get_notifications(
        &self,
        options: &ProjectRefOptions,
    ) -> ApiResult<DetailedResponse<GetNotificationsResponse>> {
        let request = ApiRequest::new(Method::GET, EVENT_PATH, "get_notifications")
            .path_param("id", &options.id)
            .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn delete_notification(
        &self,
        options: &ProjectRefOptions,
    ) -> ApiResult<DetailedResponse<()>> {
        let request = ApiRequest::new(Method::DELETE, EVENT_PATH, "delete_notification")
            .path_param("id", &options.id)
            .headers(&options.headers);
        self.send_empty(request).await
    }

    /// Forwards resource-catalog events to the service.
    pub async fn receive_pulsar_catalog_events(
        &self,
        options: &ReceivePulsarCatalogEventsOptions,
    ) -> ApiResult<DetailedResponse<()>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/pulsar/catalog_events",
            "receive_pulsar_catalog_events",
        )
        .headers(&options.headers)
        .json(&options.events)?;
        self.send_empty(request).await
    }

    /// Connects a project to an Event Notifications instance.
    pub async fn post_event_notifications_integration(
        &self,
        options: &PostEventNotificationsIntegrationOptions,
    ) -> ApiResult<DetailedResponse<ProjectNotificationsIntegrationPostResponse>> {
        if options.instance_crn.is_empty() {
            return Err(ApiError::InvalidArgument(
                "'instance_crn' must be provided".into(),
            ));
        }

        let request = ApiRequest::new(
            Method::POST,
            INTEGRATION_PATH,
            "post_event_notifications_integration",
        )
        .path_param("id", &options.id)
        .headers(&options.headers)
        .json(&IntegrationBody {
            instance_crn: &options.instance_crn,
            description: options.description.as_deref(),
            event_notifications_source_name: options.event_notifications_source_name.as_deref(),
            enabled: options.enabled,
        })?;
        self.send_json(request).await
    }

    pub async fn get_event_notifications_integration(
        &self,
        options: &ProjectRefOptions,
    ) -> ApiResult<DetailedResponse<ProjectNotificationsIntegrationGetResponse>> {
        let request = ApiRequest::new(
            Method::GET,
            INTEGRATION_PATH,
            "get_event_notifications_integration",
        )
        .path_param("id", &options.id)
        .headers(&options.headers);
        self.send_json(request).await
    }

    pub async fn delete_event_notifications_integration(
        &self,
        options: &ProjectRefOptions,
    ) -> ApiResult<DetailedResponse<()>> {
        let request = ApiRequest::new(
            Method::DELETE,
            INTEGRATION_PATH,
            "delete_event_notifications_integration",
        )
        .path_param("id", &options.id)
        .headers(&options.headers);
        self.send_empty(request).await
    }

    /// Sends a test event through the project's Event Notifications source.
    pub async fn post_test_event_notification(
        &self,
        options: &PostTestEventNotificationOptions,
    ) -> ApiResult<DetailedResponse<TestNotificationResponse>> {
        let request = ApiRequest::new(
            Method::POST,
            "/v1/projects/{id}/integrations/event_notifications/test",
            "post_test_event_notification",
        )
        .path_param("id", &options.id)
        .headers(&options.headers)
        .json(&TestNotificationBody {
            ibmendefaultlong: options.ibmendefaultlong.as_deref(),
            ibmendefaultshort: options.ibmendefaultshort.as_deref(),
        })?;
        self.send_json(request).await
    }
}
