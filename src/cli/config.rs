//
//  project-sdk
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Commands
//!
//! Commands that act on the configurations of a project. Every command
//! takes `--project-id`, and all but `configs` take the configuration `--id`.
//!
//! ## Draft Workflow
//!
//! ```bash
//! proj check --project-id <p> --id <c> --refresh-token "$REFRESH"
//! proj config-diff --project-id <p> --id <c>
//! proj draft-action --project-id <p> --id <c> --action merge --comment "approved"
//! proj install --project-id <p> --id <c>
//! proj schematics-job --project-id <p> --id <c> --action install
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::configs::{
    CheckConfigOptions, ConfigRefOptions, ConfigVersion, CreateDraftActionOptions,
    DeleteConfigOptions, DeleteProjectConfigResponse, DraftAction, ForceMergeOptions,
    GetActionJobResponse, GetConfigOptions, GetCostEstimateOptions, GetCostEstimateResponse,
    GetSchematicsJobOptions, InstallConfigOptions, ListConfigsOptions, ProjectConfig,
    ProjectConfigDiff, SchematicsJobAction,
};
use crate::output::{print_field, print_header, truncate, TableBuilder, TableOutput, TableRow};

use super::GlobalOptions;

/// Identifies one configuration of one project.
#[derive(Args, Debug, Clone)]
pub struct ConfigRef {
    /// Project ID
    #[arg(long)]
    pub project_id: String,

    /// Configuration ID
    #[arg(long)]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ConfigsArgs {
    /// Project ID
    #[arg(long)]
    pub project_id: String,

    /// Configuration version to list: active, draft or mixed
    #[arg(long = "version", id = "config_version")]
    pub version: Option<ConfigVersion>,

    /// Include computed fields
    #[arg(long)]
    pub complete: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// Configuration version to show: active, draft or mixed
    #[arg(long = "version", id = "config_version")]
    pub version: Option<ConfigVersion>,

    /// Include computed fields
    #[arg(long)]
    pub complete: bool,
}

#[derive(Args, Debug)]
pub struct DeleteConfigArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// Only delete the draft version
    #[arg(long)]
    pub draft_only: bool,

    /// Also destroy the deployed resources
    #[arg(long)]
    pub destroy: bool,
}

#[derive(Args, Debug)]
pub struct ConfigDiffArgs {
    #[command(flatten)]
    pub target: ConfigRef,
}

#[derive(Args, Debug)]
pub struct ForceMergeArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// Reason for merging without validation
    #[arg(long, short = 'm')]
    pub comment: Option<String>,
}

#[derive(Args, Debug)]
pub struct DraftActionArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// merge or discard
    #[arg(long, short = 'a')]
    pub action: DraftAction,

    /// Comment recorded with the action
    #[arg(long, short = 'm')]
    pub comment: Option<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// IAM refresh token used by the service during validation
    #[arg(long, env = "PROJECT_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Configuration version to validate: active, draft or mixed
    #[arg(long = "version", id = "config_version")]
    pub version: Option<ConfigVersion>,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    #[command(flatten)]
    pub target: ConfigRef,
}

#[derive(Args, Debug)]
pub struct UninstallArgs {
    #[command(flatten)]
    pub target: ConfigRef,
}

#[derive(Args, Debug)]
pub struct SchematicsJobArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// install, plan or uninstall
    #[arg(long, short = 'a')]
    pub action: SchematicsJobAction,

    /// Only consider jobs started after this Unix timestamp
    #[arg(long)]
    pub since: Option<i64>,
}

#[derive(Args, Debug)]
pub struct CostEstimateArgs {
    #[command(flatten)]
    pub target: ConfigRef,

    /// Configuration version to estimate: active, draft or mixed
    #[arg(long = "version", id = "config_version")]
    pub version: Option<ConfigVersion>,
}

/// Renders a serde enum by its wire name.
fn wire_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => "-".to_string(),
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

impl TableRow for ProjectConfig {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Type", "Locator"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_else(|| "-".into()),
            self.name.clone().unwrap_or_else(|| "-".into()),
            self.kind.as_ref().map(wire_name).unwrap_or_else(|| "-".into()),
            truncate(self.locator_id.as_deref().unwrap_or("-"), 48),
        ]
    }
}

impl TableOutput for ProjectConfig {
    fn print_table(&self, color: bool) {
        print_header(self.name.as_deref().unwrap_or("(unnamed configuration)"), color);
        print_field("ID", self.id.as_deref().unwrap_or("-"), color);
        print_field(
            "Type",
            &self.kind.as_ref().map(wire_name).unwrap_or_else(|| "-".into()),
            color,
        );
        print_field("Locator", self.locator_id.as_deref().unwrap_or("-"), color);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            print_field("Description", description, color);
        }
        if !self.labels.is_empty() {
            print_field("Labels", &self.labels.join(", "), color);
        }

        if !self.input.is_empty() {
            println!();
            TableBuilder::new()
                .color(color)
                .headers(["Input", "Type", "Value", "Required"])
                .rows(self.input.iter().map(|input| {
                    [
                        input.name.clone(),
                        input.kind.as_ref().map(wire_name).unwrap_or_else(|| "-".into()),
                        input
                            .value
                            .as_ref()
                            .map(|v| truncate(&display_value(v), 40))
                            .unwrap_or_else(|| "-".into()),
                        if input.required.unwrap_or(false) { "yes" } else { "no" }.to_string(),
                    ]
                }))
                .print();
        }

        if !self.output.is_empty() {
            println!();
            TableBuilder::new()
                .color(color)
                .headers(["Output", "Value"])
                .rows(
                    self.output
                        .iter()
                        .map(|output| [output.name.clone(), output.value.join(", ")]),
                )
                .print();
        }
    }
}

impl TableOutput for DeleteProjectConfigResponse {
    fn print_table(&self, color: bool) {
        print_field("Deleted", self.id.as_deref().unwrap_or("-"), color);
        if let Some(name) = &self.name {
            print_field("Name", name, color);
        }
    }
}

impl TableOutput for ProjectConfigDiff {
    fn print_table(&self, color: bool) {
        let mut rows = Vec::new();
        for (change, diff) in [
            ("added", &self.added),
            ("changed", &self.changed),
            ("removed", &self.removed),
        ] {
            let Some(diff) = diff else { continue };
            for input in &diff.input {
                rows.push([
                    change.to_string(),
                    input.name.clone(),
                    input.kind.as_ref().map(wire_name).unwrap_or_else(|| "-".into()),
                ]);
            }
        }

        if rows.is_empty() {
            println!("No differences between the active and draft versions.");
            return;
        }
        TableBuilder::new()
            .color(color)
            .headers(["Change", "Input", "Type"])
            .rows(rows)
            .print();
    }
}

impl TableOutput for GetActionJobResponse {
    fn print_table(&self, color: bool) {
        print_field("Job ID", self.id.as_deref().unwrap_or("-"), color);
    }
}

impl TableOutput for GetCostEstimateResponse {
    fn print_table(&self, color: bool) {
        if self.additional_properties.is_empty() {
            println!("No cost estimate available.");
            return;
        }
        for (key, value) in &self.additional_properties {
            print_field(key, &truncate(&display_value(value), 80), color);
        }
    }
}

impl ConfigsArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = ListConfigsOptions::new(&self.project_id);
        if let Some(version) = self.version {
            options = options.with_version(version);
        }
        if self.complete {
            options = options.with_complete(true);
        }

        let list = client.list_configs(&options).await?.into_result();
        global.writer().write_list(&list.configs)
    }
}

impl ConfigArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = GetConfigOptions::new(&self.target.project_id, &self.target.id);
        if let Some(version) = self.version {
            options = options.with_version(version);
        }
        if self.complete {
            options = options.with_complete(true);
        }

        let config = client.get_config(&options).await?.into_result();
        global.writer().write(&config)
    }
}

impl DeleteConfigArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = DeleteConfigOptions::new(&self.target.project_id, &self.target.id);
        if self.draft_only {
            options = options.with_draft_only(true);
        }
        if self.destroy {
            options = options.with_destroy(true);
        }

        let deleted = client.delete_config(&options).await?.into_result();
        global.writer().write(&deleted)
    }
}

impl ConfigDiffArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let options = ConfigRefOptions::new(&self.target.project_id, &self.target.id);
        let diff = client.get_config_diff(&options).await?.into_result();
        global.writer().write(&diff)
    }
}

impl ForceMergeArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = ForceMergeOptions::new(&self.target.project_id, &self.target.id);
        if let Some(comment) = &self.comment {
            options = options.with_comment(comment);
        }

        let config = client.force_merge(&options).await?.into_result();
        global.writer().write(&config)
    }
}

impl DraftActionArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options =
            CreateDraftActionOptions::new(&self.target.project_id, &self.target.id, self.action);
        if let Some(comment) = &self.comment {
            options = options.with_comment(comment);
        }

        let config = client.create_draft_action(&options).await?.into_result();
        global.writer().write(&config)
    }
}

impl CheckArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let mut options = CheckConfigOptions::new(&self.target.project_id, &self.target.id);
        if let Some(token) = &self.refresh_token {
            options = options.with_refresh_token(token);
        }
        if let Some(version) = self.version {
            options = options.with_version(version);
        }

        writer.write_info(&format!("Validating configuration {}...", self.target.id));
        let config = client.check_config(&options).await?.into_result();
        writer.write(&config)
    }
}

impl InstallArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let options = InstallConfigOptions::new(&self.target.project_id, &self.target.id);
        writer.write_info(&format!("Deploying configuration {}...", self.target.id));
        let config = client.install_config(&options).await?.into_result();
        writer.write(&config)
    }
}

impl UninstallArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let options = ConfigRefOptions::new(&self.target.project_id, &self.target.id);
        writer.write_info(&format!("Destroying resources of configuration {}...", self.target.id));
        client.uninstall_config(&options).await?;
        writer.write_ok();
        Ok(())
    }
}

impl SchematicsJobArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options =
            GetSchematicsJobOptions::new(&self.target.project_id, &self.target.id, self.action);
        if let Some(since) = self.since {
            options = options.with_since(since);
        }

        let job = client.get_schematics_job(&options).await?.into_result();
        global.writer().write(&job)
    }
}

impl CostEstimateArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = GetCostEstimateOptions::new(&self.target.project_id, &self.target.id);
        if let Some(version) = self.version {
            options = options.with_version(version);
        }

        let estimate = client.get_cost_estimate(&options).await?.into_result();
        global.writer().write(&estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::configs::{InputVariableType, ProjectConfigType};

    #[test]
    fn test_wire_name_uses_serde_names() {
        assert_eq!(wire_name(&ProjectConfigType::TerraformTemplate), "terraform_template");
        assert_eq!(wire_name(&InputVariableType::Password), "password");
    }

    #[test]
    fn test_display_value_unquotes_strings() {
        assert_eq!(display_value(&serde_json::json!("us-south")), "us-south");
        assert_eq!(display_value(&serde_json::json!(3)), "3");
        assert_eq!(display_value(&serde_json::Value::Null), "-");
    }

    #[test]
    fn test_config_row() {
        let config = ProjectConfig {
            id: Some("c-1".into()),
            name: Some("vpc".into()),
            kind: Some(ProjectConfigType::TerraformTemplate),
            locator_id: Some("1082e7d2-5e2f-0a11.0f5e".into()),
            ..ProjectConfig::default()
        };
        assert_eq!(
            config.row(false),
            vec!["c-1", "vpc", "terraform_template", "1082e7d2-5e2f-0a11.0f5e"]
        );
    }
}
