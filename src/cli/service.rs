//
//  project-sdk
//  cli/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service-level commands: project events, health and the broker catalog.

use anyhow::Result;
use clap::Args;

use crate::api::broker::{CatalogService, GetCatalogOptions};
use crate::api::health::{Health, HealthOptions};
use crate::api::notifications::{NotificationEventWithId, ProjectRefOptions};
use crate::output::{format_bool, print_field, print_header, truncate, TableOutput, TableRow};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Project ID
    #[arg(long)]
    pub project_id: String,
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Include the status of the service's dependencies
    #[arg(long)]
    pub info: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Broker API version sent as X-Broker-Api-Version
    #[arg(long)]
    pub broker_api_version: Option<String>,
}

impl TableRow for NotificationEventWithId {
    const HEADERS: &'static [&'static str] = &["ID", "Event", "Target", "Source", "Triggered By"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_else(|| "-".into()),
            self.event.event.clone(),
            truncate(&self.event.target, 40),
            self.event.source.clone().unwrap_or_else(|| "-".into()),
            self.event.triggered_by.clone().unwrap_or_else(|| "-".into()),
        ]
    }
}

impl TableOutput for Health {
    fn print_table(&self, color: bool) {
        print_header(self.name.as_deref().unwrap_or("service"), color);
        print_field("Version", self.version.as_deref().unwrap_or("-"), color);
        for (name, status) in &self.dependencies {
            let status = match status {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            print_field(name, &status, color);
        }
    }
}

impl TableRow for CatalogService {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Bindable", "Plans"];

    fn row(&self, color: bool) -> Vec<String> {
        let plans: Vec<&str> = self.plans.iter().filter_map(|p| p.name.as_deref()).collect();
        vec![
            self.id.clone().unwrap_or_else(|| "-".into()),
            self.name.clone().unwrap_or_else(|| "-".into()),
            format_bool(self.bindable.unwrap_or(false), color),
            if plans.is_empty() { "-".into() } else { plans.join(", ") },
        ]
    }
}

impl NotificationsArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let options = ProjectRefOptions::new(&self.project_id);
        let events = client.get_notifications(&options).await?.into_result();
        global.writer().write_list(&events.notifications)
    }
}

impl HealthArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = HealthOptions::new();
        if self.info {
            options = options.with_info(true);
        }

        let health = client.get_health(&options).await?.into_result();
        global.writer().write(&health)
    }
}

impl CatalogArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = GetCatalogOptions::default();
        options.broker.api_version = self.broker_api_version.clone();

        let catalog = client.get_catalog(&options).await?.into_result();
        global.writer().write_list(&catalog.services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::broker::CatalogPlan;
    use crate::api::notifications::NotificationEvent;

    #[test]
    fn test_event_row() {
        let event = NotificationEventWithId {
            event: NotificationEvent::new("project.create.failed", "crn:v1:bluemix:public:project")
                .with_source("id.of.project.service.instance"),
            id: Some("n-1".into()),
        };
        assert_eq!(
            event.row(false),
            vec![
                "n-1",
                "project.create.failed",
                "crn:v1:bluemix:public:project",
                "id.of.project.service.instance",
                "-"
            ]
        );
    }

    #[test]
    fn test_catalog_row_lists_plan_names() {
        let service = CatalogService {
            id: Some("svc-1".into()),
            name: Some("project".into()),
            bindable: Some(false),
            plans: vec![
                CatalogPlan {
                    name: Some("standard".into()),
                    ..CatalogPlan::default()
                },
                CatalogPlan::default(),
            ],
            ..CatalogService::default()
        };
        assert_eq!(service.row(false), vec!["svc-1", "project", "No", "standard"]);
    }
}
