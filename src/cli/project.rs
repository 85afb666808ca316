//
//  project-sdk
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project Commands
//!
//! `list`, `get`, `create`, `update` and `delete`.
//!
//! ## Paging
//!
//! `list` fetches one page by default and hints at the next cursor.
//! `--all-pages` walks every page through the project pager and prints a
//! single combined list; it cannot be combined with `--start`.
//!
//! ## Examples
//!
//! ```bash
//! proj list --limit 20
//! proj list --all-pages --output json
//! proj create --name infra --resource-group Default --location us-south
//! proj update --id <id> --patch '[{"op":"replace","path":"/name","value":"infra-v2"}]'
//! proj delete --id <id> --destroy
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use tracing::debug;

use crate::api::common::JsonPatchOperation;
use crate::api::projects::{
    CreateProjectOptions, DeleteProjectOptions, GetProjectOptions, GetProjectResponse,
    ListProjectsOptions, ProjectListItem, ProjectUpdate, UpdateProjectOptions,
};
use crate::output::{
    format_state, format_timestamp, print_field, print_header, TableBuilder, TableOutput, TableRow,
};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Cursor of the page to fetch, as printed by a previous call
    #[arg(long)]
    pub start: Option<String>,

    /// Maximum number of projects per page (1-100)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(i64).range(1..=100))]
    pub limit: Option<i64>,

    /// Include computed fields such as cumulative attention items
    #[arg(long)]
    pub complete: bool,

    /// Fetch every page and print one combined list
    #[arg(long, conflicts_with = "start")]
    pub all_pages: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Project ID
    #[arg(long)]
    pub id: String,

    /// Leave the configuration list out of the response
    #[arg(long)]
    pub exclude_configs: bool,

    /// Include computed fields
    #[arg(long)]
    pub complete: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Resource group the project belongs to
    #[arg(long, short = 'g')]
    pub resource_group: String,

    /// Region the project is stored in, such as us-south
    #[arg(long)]
    pub location: String,

    /// Project description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Project ID
    #[arg(long)]
    pub id: String,

    /// JSON patch operations, as an array or a single object
    #[arg(long)]
    pub patch: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project ID
    #[arg(long)]
    pub id: String,

    /// Also destroy the resources deployed by the project's configurations
    #[arg(long)]
    pub destroy: bool,
}

impl TableRow for ProjectListItem {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Location", "State", "Created"];

    fn row(&self, color: bool) -> Vec<String> {
        let metadata = self.metadata.as_ref();
        vec![
            self.id.clone().unwrap_or_else(|| "-".into()),
            self.name.clone().unwrap_or_else(|| "-".into()),
            metadata
                .and_then(|m| m.location.clone())
                .unwrap_or_else(|| "-".into()),
            metadata
                .and_then(|m| m.state.as_deref())
                .map(|state| format_state(state, color))
                .unwrap_or_else(|| "-".into()),
            format_timestamp(metadata.and_then(|m| m.created_at.as_ref())),
        ]
    }
}

impl TableOutput for GetProjectResponse {
    fn print_table(&self, color: bool) {
        print_header(self.name.as_deref().unwrap_or("(unnamed project)"), color);
        print_field("ID", self.id.as_deref().unwrap_or("-"), color);
        print_field("CRN", self.crn.as_deref().unwrap_or("-"), color);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            print_field("Description", description, color);
        }

        if let Some(metadata) = &self.metadata {
            print_field("Location", metadata.location.as_deref().unwrap_or("-"), color);
            print_field(
                "Resource group",
                metadata.resource_group.as_deref().unwrap_or("-"),
                color,
            );
            print_field(
                "State",
                &format_state(metadata.state.as_deref().unwrap_or("-"), color),
                color,
            );
            print_field("Created", &format_timestamp(metadata.created_at.as_ref()), color);

            if !metadata.cumulative_needs_attention_view.is_empty() {
                let count = metadata.cumulative_needs_attention_view.len();
                let line = format!("{count} item(s) need attention");
                if color {
                    println!("{}", style(line).yellow());
                } else {
                    println!("{line}");
                }
            }
        }

        if !self.configs.is_empty() {
            println!();
            TableBuilder::new()
                .color(color)
                .headers(<crate::api::configs::ProjectConfig as TableRow>::HEADERS.iter().copied())
                .rows(self.configs.iter().map(|config| config.row(color)))
                .print();
        }
    }
}

impl TableOutput for ProjectUpdate {
    fn print_table(&self, color: bool) {
        print_field("Name", self.name.as_deref().unwrap_or("-"), color);
        print_field("Description", self.description.as_deref().unwrap_or("-"), color);
    }
}

/// Parses `--patch`, accepting one operation or an array of them.
fn parse_patch(raw: &str) -> Result<Vec<JsonPatchOperation>> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("--patch is not valid JSON")?;
    let operations = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|op| vec![op])
    };
    operations.context("--patch must contain JSON patch operations with 'op' and 'path'")
}

impl ListArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let mut options = ListProjectsOptions::new();
        if let Some(limit) = self.limit {
            options = options.with_limit(limit);
        }
        if self.complete {
            options = options.with_complete(true);
        }

        if self.all_pages {
            let mut pager = client.projects_pager(options)?;
            let projects = pager.get_all().await?;
            debug!(count = projects.len(), "fetched all project pages");
            return writer.write_list(&projects);
        }

        if let Some(start) = &self.start {
            options = options.with_start(start.clone());
        }
        let page = client.list_projects(&options).await?.into_result();
        writer.write_list(&page.projects)?;
        if let Some(next) = page.next_start() {
            writer.write_info(&format!("More projects available. Continue with --start {next}"));
        }
        Ok(())
    }
}

impl GetArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut options = GetProjectOptions::new(&self.id);
        if self.exclude_configs {
            options = options.with_exclude_configs(true);
        }
        if self.complete {
            options = options.with_complete(true);
        }

        let project = client.get_project(&options).await?.into_result();
        global.writer().write(&project)
    }
}

impl CreateArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let mut options = CreateProjectOptions::new(&self.resource_group, &self.location, &self.name);
        if let Some(description) = &self.description {
            options = options.with_description(description);
        }

        writer.write_info(&format!("Creating project {}...", self.name));
        let project = client.create_project(&options).await?.into_result();
        writer.write(&project)
    }
}

impl UpdateArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let operations = parse_patch(&self.patch)?;
        let client = global.client()?;

        let options = UpdateProjectOptions::new(&self.id, operations);
        let updated = client.update_project(&options).await?.into_result();
        global.writer().write(&updated)
    }
}

impl DeleteArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let mut options = DeleteProjectOptions::new(&self.id);
        if self.destroy {
            options = options.with_destroy(true);
        }

        writer.write_info(&format!("Deleting project {}...", self.id));
        client.delete_project(&options).await?;
        writer.write_ok();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::JsonPatchOp;
    use crate::api::projects::ProjectMetadata;

    #[test]
    fn test_parse_patch_accepts_object_or_array() {
        let single = parse_patch(r#"{"op": "replace", "path": "/name", "value": "x"}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].op, JsonPatchOp::Replace);

        let many = parse_patch(
            r#"[{"op": "replace", "path": "/name", "value": "x"},
                {"op": "remove", "path": "/description"}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].path, "/description");
    }

    #[test]
    fn test_parse_patch_rejects_garbage() {
        assert!(parse_patch("not json").is_err());
        assert!(parse_patch(r#"{"path": "/name"}"#).is_err());
    }

    #[test]
    fn test_project_row_fills_missing_fields() {
        let item = ProjectListItem {
            id: Some("p-1".into()),
            name: Some("infra".into()),
            metadata: Some(ProjectMetadata {
                location: Some("us-south".into()),
                state: Some("active".into()),
                ..ProjectMetadata::default()
            }),
            ..ProjectListItem::default()
        };
        assert_eq!(item.row(false), vec!["p-1", "infra", "us-south", "active", "-"]);

        let bare = ProjectListItem::default();
        assert_eq!(bare.row(false), vec!["-", "-", "-", "-", "-"]);
    }
}
