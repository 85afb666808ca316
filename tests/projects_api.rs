//
//  project-sdk
//  tests/projects_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::BTreeMap;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use project_sdk::api::broker::{
    BrokerHeaders, CreateServiceInstanceOptions, DeleteServiceInstanceOptions,
    GetCatalogOptions, GetLastOperationOptions, GetServiceInstanceOptions,
    ReplaceServiceInstanceStateOptions, UpdateServiceInstanceOptions,
};
use project_sdk::api::common::{ApiError, JsonPatchOperation};
use project_sdk::api::configs::{
    CheckConfigOptions, ConfigVersion, CreateDraftActionOptions, DeleteConfigOptions,
    DraftAction, ForceMergeOptions, GetConfigDiffOptions, GetCostEstimateOptions,
    GetSchematicsJobOptions, InstallConfigOptions, ListConfigsOptions, ProjectConfigType,
    SchematicsJobAction, UninstallConfigOptions,
};
use project_sdk::api::notifications::{
    NotificationEvent, PostEventNotificationsIntegrationOptions, PostNotificationOptions,
    PostTestEventNotificationOptions, ProjectRefOptions, PulsarEventItems,
    ReceivePulsarCatalogEventsOptions,
};
use project_sdk::api::projects::{
    CreateProjectOptions, DeleteProjectOptions, GetProjectOptions, UpdateProjectOptions,
};
use project_sdk::{Authenticator, ClientOptions, ProjectClient, RetryConfig};

const PROJECT_ID: &str = "a9e5a3fb-9ef6-4a1c-8b08-6c1bb6b7f6f4";
const CONFIG_ID: &str = "cfg-1";

fn client_with(server: &ServerGuard, auth: Authenticator) -> ProjectClient {
    ProjectClient::new(ClientOptions::new(auth).with_service_url(server.url())).unwrap()
}

fn client_for(server: &ServerGuard) -> ProjectClient {
    client_with(server, Authenticator::NoAuth)
}

#[tokio::test]
async fn test_create_project_sends_query_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resource_group".into(), "Default".into()),
            Matcher::UrlEncoded("location".into(), "us-south".into()),
        ]))
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header(
            "x-sdk-analytics",
            "service_name=project;service_version=V1;operation_id=create_project",
        )
        .match_body(Matcher::Json(json!({"name": "acme", "description": "infra"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": PROJECT_ID,
                "name": "acme",
                "crn": "crn:v1:staging:public:project:us-south:a/4e1c::project:a9e5",
                "metadata": {
                    "location": "us-south",
                    "resource_group": "Default",
                    "state": "active",
                    "created_at": "2023-10-05T14:03:00Z"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let options =
        CreateProjectOptions::new("Default", "us-south", "acme").with_description("infra");
    let response = client.create_project(&options).await.unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.result.id.as_deref(), Some(PROJECT_ID));
    let metadata = response.result.metadata.unwrap();
    assert_eq!(metadata.state.as_deref(), Some("active"));
    assert!(metadata.created_at.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_project_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v1/projects/{PROJECT_ID}").as_str())
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": [{"code": "not_found", "message": "Project not found"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_project(&GetProjectOptions::new(PROJECT_ID))
        .await
        .unwrap_err();

    match &err {
        ApiError::NotFound(message) => assert_eq!(message, "Project not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(err.status_code(), Some(404));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_path_param_fails_without_request() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let err = client
        .get_project(&GetProjectOptions::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_update_project_sends_json_patch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", format!("/v1/projects/{PROJECT_ID}").as_str())
        .match_header("content-type", "application/json-patch+json")
        .match_body(Matcher::Json(json!([
            {"op": "replace", "path": "/name", "value": "acme-v2"}
        ])))
        .with_status(200)
        .with_body(r#"{"name": "acme-v2"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let options = UpdateProjectOptions::new(
        PROJECT_ID,
        vec![JsonPatchOperation::replace("/name", json!("acme-v2"))],
    );
    let updated = client.update_project(&options).await.unwrap().into_result();

    assert_eq!(updated.name.as_deref(), Some("acme-v2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_project_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", format!("/v1/projects/{PROJECT_ID}").as_str())
        .match_query(Matcher::Exact("destroy=true".into()))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .delete_project(&DeleteProjectOptions::new(PROJECT_ID).with_destroy(true))
        .await
        .unwrap();

    assert_eq!(response.status_code, 204);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_configs_with_version() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v1/projects/{PROJECT_ID}/configs").as_str())
        .match_query(Matcher::Exact("version=draft".into()))
        .with_status(200)
        .with_body(
            json!({
                "configs": [
                    {"id": CONFIG_ID, "name": "vpc", "type": "terraform_template"},
                    {"id": "cfg-2", "name": "legacy", "type": "something_new"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let options = ListConfigsOptions::new(PROJECT_ID).with_version(ConfigVersion::Draft);
    let list = client.list_configs(&options).await.unwrap().into_result();

    assert_eq!(list.configs.len(), 2);
    assert_eq!(list.configs[0].kind, Some(ProjectConfigType::TerraformTemplate));
    assert_eq!(list.configs[1].kind, Some(ProjectConfigType::Unknown));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_config_draft_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "DELETE",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}").as_str(),
        )
        .match_query(Matcher::Exact("draft_only=true".into()))
        .with_status(200)
        .with_body(json!({"id": CONFIG_ID, "name": "vpc"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = DeleteConfigOptions::new(PROJECT_ID, CONFIG_ID).with_draft_only(true);
    let deleted = client.delete_config(&options).await.unwrap().into_result();

    assert_eq!(deleted.id.as_deref(), Some(CONFIG_ID));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_config_sends_refresh_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/check").as_str(),
        )
        .match_header("x-auth-refresh-token", "refresh-me")
        .with_status(202)
        .with_body(json!({"id": CONFIG_ID}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = CheckConfigOptions::new(PROJECT_ID, CONFIG_ID).with_refresh_token("refresh-me");
    let config = client.check_config(&options).await.unwrap();

    assert_eq!(config.status_code, 202);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_draft_action_path_and_comment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/draft/discard").as_str(),
        )
        .match_body(Matcher::Json(json!({"comment": "not needed"})))
        .with_status(201)
        .with_body(json!({"id": CONFIG_ID}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = CreateDraftActionOptions::new(PROJECT_ID, CONFIG_ID, DraftAction::Discard)
        .with_comment("not needed");
    client.create_draft_action(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_notification() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", format!("/v1/projects/{PROJECT_ID}/event").as_str())
        .match_body(Matcher::PartialJson(json!({
            "notifications": [{"event": "project.create.failed", "target": PROJECT_ID}]
        })))
        .with_status(201)
        .with_body(
            json!({
                "notifications": [{
                    "event": "project.create.failed",
                    "target": PROJECT_ID,
                    "id": "n-1",
                    "status": "SUCCESS"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let options = PostNotificationOptions::new(
        PROJECT_ID,
        vec![NotificationEvent::new("project.create.failed", PROJECT_ID)],
    );
    let response = client.post_notification(&options).await.unwrap().into_result();

    assert_eq!(response.notifications.len(), 1);
    assert_eq!(response.notifications[0].status.as_deref(), Some("SUCCESS"));
    assert_eq!(response.notifications[0].event.event, "project.create.failed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_integration_requires_instance_crn() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let err = client
        .post_event_notifications_integration(&PostEventNotificationsIntegrationOptions::new(
            PROJECT_ID, "",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_catalog_sends_broker_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/catalog")
        .match_header("x-broker-api-version", "1.0")
        .match_header("x-broker-api-originating-identity", "ibmcloud dXNlcg==")
        .with_status(200)
        .with_body(json!({"services": [{"id": "svc-1", "name": "project"}]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = GetCatalogOptions {
        broker: BrokerHeaders {
            api_version: Some("1.0".into()),
            originating_identity: Some("ibmcloud dXNlcg==".into()),
        },
        ..GetCatalogOptions::default()
    };
    let catalog = client.get_catalog(&options).await.unwrap().into_result();

    assert_eq!(catalog.services[0].id.as_deref(), Some("svc-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_service_instance_body_and_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2/service_instances/inst-1")
        .match_query(Matcher::Exact("accepts_incomplete=true".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "service_id": "svc-1",
            "plan_id": "plan-1",
            "parameters": {"region": "us-south"}
        })))
        .with_status(201)
        .with_body(json!({"operation": "provision-1"}).to_string())
        .create_async()
        .await;

    let mut parameters = serde_json::Map::new();
    parameters.insert("region".into(), json!("us-south"));

    let client = client_for(&server);
    let options = CreateServiceInstanceOptions::new("inst-1", "svc-1", "plan-1")
        .with_parameters(parameters)
        .with_accepts_incomplete(true);
    let created = client.create_service_instance(&options).await.unwrap().into_result();

    assert_eq!(created.operation.as_deref(), Some("provision-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_service_instance_requires_plan_and_service() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    for options in [
        DeleteServiceInstanceOptions::new("inst-1", "", "svc-1"),
        DeleteServiceInstanceOptions::new("inst-1", "plan-1", ""),
    ] {
        let err = client.delete_service_instance(&options).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("plan_id")));
    }
}

#[tokio::test]
async fn test_delete_service_instance_query_and_identity() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v2/service_instances/inst-1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("plan_id".into(), "plan-1".into()),
            Matcher::UrlEncoded("service_id".into(), "svc-1".into()),
            Matcher::UrlEncoded("accepts_incomplete".into(), "false".into()),
        ]))
        .match_header("x-broker-api-originating-identity", "ibmcloud dXNlcg==")
        .with_status(200)
        .with_body(json!({"operation": "deprovision-1"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = DeleteServiceInstanceOptions::new("inst-1", "plan-1", "svc-1");
    options.accepts_incomplete = Some(false);
    options.broker.originating_identity = Some("ibmcloud dXNlcg==".into());
    let deleted = client.delete_service_instance(&options).await.unwrap().into_result();

    assert_eq!(
        deleted.additional_properties.get("operation"),
        Some(&json!("deprovision-1"))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_service_instance_sends_json_patch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/service_instances/inst-1")
        .match_header("content-type", "application/json-patch+json")
        .match_header("x-broker-api-version", "1.0")
        .match_body(Matcher::Json(json!([
            {"op": "replace", "path": "/plan_id", "value": "plan-2"}
        ])))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = UpdateServiceInstanceOptions::new(
        "inst-1",
        vec![JsonPatchOperation::replace("/plan_id", json!("plan-2"))],
    );
    options.broker.api_version = Some("1.0".into());
    client.update_service_instance(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_last_operation_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/service_instances/inst-1/last_operation")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("operation".into(), "provision-1".into()),
            Matcher::UrlEncoded("plan_id".into(), "plan-1".into()),
        ]))
        .with_status(200)
        .with_body(json!({"state": "in progress", "description": "creating"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = GetLastOperationOptions::new("inst-1");
    options.operation = Some("provision-1".into());
    options.plan_id = Some("plan-1".into());
    let last = client.get_last_operation(&options).await.unwrap().into_result();

    assert_eq!(last.state.as_deref(), Some("in progress"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_replace_service_instance_state_uses_bluemix_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/bluemix_v1/service_instances/inst-1")
        .match_body(Matcher::Json(json!({"enabled": false, "initiator_id": "user-1"})))
        .with_status(200)
        .with_body(json!({"active": "true", "enabled": "false"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = ReplaceServiceInstanceStateOptions::new("inst-1", false);
    options.initiator_id = Some("user-1".into());
    let state = client
        .replace_service_instance_state(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(state.enabled.as_deref(), Some("false"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_service_instance_uses_bluemix_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/bluemix_v1/service_instances/inst-1")
        .match_header("x-broker-api-originating-identity", "ibmcloud dXNlcg==")
        .with_status(200)
        .with_body(json!({"active": "true", "last_active": "1700000000"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = GetServiceInstanceOptions::new("inst-1");
    options.broker.originating_identity = Some("ibmcloud dXNlcg==".into());
    let instance = client.get_service_instance(&options).await.unwrap().into_result();

    assert_eq!(instance.active.as_deref(), Some("true"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pulsar_events_sent_as_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/pulsar/catalog_events")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r"^\[\{".into()),
            Matcher::Regex(r#""event_type":"create""#.into()),
            Matcher::Regex(r#""account_id":"acct-1""#.into()),
        ]))
        .with_status(202)
        .create_async()
        .await;

    let event = PulsarEventItems {
        event_type: "create".into(),
        timestamp: "2023-10-05T14:03:00Z".parse().unwrap(),
        publisher: "catalog".into(),
        account_id: "acct-1".into(),
        version: "v1".into(),
        event_properties: None,
        event_id: Some("evt-1".into()),
        additional_properties: serde_json::Map::new(),
    };

    let client = client_for(&server);
    let response = client
        .receive_pulsar_catalog_events(&ReceivePulsarCatalogEventsOptions::new(vec![event]))
        .await
        .unwrap();

    assert_eq!(response.status_code, 202);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_event_notifications_integration_get_and_delete() {
    let mut server = Server::new_async().await;
    let path = format!("/v1/projects/{PROJECT_ID}/integrations/event_notifications");
    let get = server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_body(json!({"name": "my-en", "enabled": true, "topic_count": 2}).to_string())
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", path.as_str())
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let options = ProjectRefOptions::new(PROJECT_ID);

    let integration = client
        .get_event_notifications_integration(&options)
        .await
        .unwrap()
        .into_result();
    assert_eq!(integration.name.as_deref(), Some("my-en"));
    assert_eq!(integration.topic_count, Some(2));

    let deleted = client.delete_event_notifications_integration(&options).await.unwrap();
    assert_eq!(deleted.status_code, 204);

    get.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_post_test_event_notification() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/v1/projects/{PROJECT_ID}/integrations/event_notifications/test").as_str(),
        )
        .match_body(Matcher::Json(json!({"ibmendefaultshort": "ping"})))
        .with_status(201)
        .with_body(json!({"id": "evt-1", "ibmendefaultshort": "ping"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = PostTestEventNotificationOptions::new(PROJECT_ID).with_short_message("ping");
    let sent = client
        .post_test_event_notification(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(sent.ibmendefaultshort.as_deref(), Some("ping"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_install_and_uninstall_config() {
    let mut server = Server::new_async().await;
    let base = format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}");
    let install = server
        .mock("POST", format!("{base}/install").as_str())
        .with_status(202)
        .with_body(json!({"id": CONFIG_ID, "state": "installing"}).to_string())
        .create_async()
        .await;
    let uninstall = server
        .mock("POST", format!("{base}/uninstall").as_str())
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let installed = client
        .install_config(&InstallConfigOptions::new(PROJECT_ID, CONFIG_ID))
        .await
        .unwrap();
    assert_eq!(installed.status_code, 202);
    assert_eq!(installed.result.id.as_deref(), Some(CONFIG_ID));

    let uninstalled = client
        .uninstall_config(&UninstallConfigOptions::new(PROJECT_ID, CONFIG_ID))
        .await
        .unwrap();
    assert_eq!(uninstalled.status_code, 204);

    install.assert_async().await;
    uninstall.assert_async().await;
}

#[tokio::test]
async fn test_force_merge_sends_comment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/draft/force_merge").as_str(),
        )
        .match_body(Matcher::Json(json!({"comment": "approved"})))
        .with_status(201)
        .with_body(json!({"id": CONFIG_ID}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = ForceMergeOptions::new(PROJECT_ID, CONFIG_ID).with_comment("approved");
    client.force_merge(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_config_diff() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/diff").as_str(),
        )
        .with_status(200)
        .with_body(json!({"added": {"input": [{"name": "region"}]}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let diff = client
        .get_config_diff(&GetConfigDiffOptions::new(PROJECT_ID, CONFIG_ID))
        .await
        .unwrap()
        .into_result();

    assert_eq!(diff.added.unwrap().input[0].name, "region");
    assert!(diff.removed.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_schematics_job_sends_since() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/job/plan").as_str(),
        )
        .match_query(Matcher::Exact("since=1700000000".into()))
        .with_status(200)
        .with_body(json!({"id": "job-1"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = GetSchematicsJobOptions::new(PROJECT_ID, CONFIG_ID, SchematicsJobAction::Plan)
        .with_since(1_700_000_000);
    let job = client.get_schematics_job(&options).await.unwrap().into_result();

    assert_eq!(job.id.as_deref(), Some("job-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_cost_estimate_with_version() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/v1/projects/{PROJECT_ID}/configs/{CONFIG_ID}/cost_estimate").as_str(),
        )
        .match_query(Matcher::Exact("version=active".into()))
        .with_status(200)
        .with_body(json!({"currency": "USD", "totalMonthlyCost": "12.50"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options =
        GetCostEstimateOptions::new(PROJECT_ID, CONFIG_ID).with_version(ConfigVersion::Active);
    let estimate = client.get_cost_estimate(&options).await.unwrap().into_result();

    assert_eq!(estimate.additional_properties.get("currency"), Some(&json!("USD")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_auth_and_default_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/health")
        .match_header("authorization", "Bearer s3cret")
        .match_header("x-team", "infra")
        .with_status(200)
        .with_body(r#"{"name": "projects", "version": "1.0.0"}"#)
        .create_async()
        .await;

    let mut client = client_with(&server, Authenticator::BearerToken("s3cret".into()));
    client.set_default_headers(BTreeMap::from([("X-Team".to_string(), "infra".to_string())]));
    let health = client
        .get_health(&Default::default())
        .await
        .unwrap()
        .into_result();

    assert_eq!(health.version.as_deref(), Some("1.0.0"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_basic_auth_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/health")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_with(
        &server,
        Authenticator::Basic {
            username: "user".into(),
            password: "pass".into(),
        },
    );
    client.get_health(&Default::default()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_retries_transient_failures_until_exhausted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/health")
        .with_status(503)
        .with_body(r#"{"errors": [{"message": "try later"}]}"#)
        .expect(3)
        .create_async()
        .await;

    let mut options = ClientOptions::new(Authenticator::NoAuth).with_service_url(server.url());
    options.retry = Some(RetryConfig {
        max_retries: 2,
        max_interval: Duration::from_millis(20),
        min_interval: Duration::from_millis(5),
    });
    let client = ProjectClient::new(options).unwrap();

    let err = client.get_health(&Default::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::ServerError { status: 503, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/health")
        .with_status(400)
        .with_body(r#"{"message": "bad info flag"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut client = client_for(&server);
    client.enable_retries(3, Duration::from_millis(10));

    let err = client.get_health(&Default::default()).await.unwrap_err();
    match err {
        ApiError::BadRequest(message) => assert_eq!(message, "bad info flag"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    mock.assert_async().await;
}
