//
//  project-sdk
//  api/health.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiRequest, ProjectClient};
use super::common::{ApiResult, DetailedResponse};

/// Service health, optionally with the status of its dependencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub dependencies: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct HealthOptions {
    /// Include dependency details.
    pub info: Option<bool>,
    pub headers: BTreeMap<String, String>,
}

impl HealthOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info(mut self, info: bool) -> Self {
        self.info = Some(info);
        self
    }
}

impl ProjectClient {
    pub async fn get_health(&self, options: &HealthOptions) -> ApiResult<DetailedResponse<Health>> {
        let request = ApiRequest::new(Method::GET, "/v1/health", "get_health")
            .query("info", options.info)
            .headers(&options.headers);
        self.send_json(request).await
    }
}
