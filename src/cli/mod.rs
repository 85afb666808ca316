//
//  project-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CLI Module
//!
//! Command-line interface definitions for `proj`, built on the clap derive API.
//!
//! ## Architecture
//!
//! - [`Cli`]: Root command structure containing global options and subcommands
//! - [`GlobalOptions`]: Flags available to every command
//! - [`Commands`]: One subcommand per client operation
//!
//! Commands are grouped by resource:
//!
//! - [`project`]: `list`, `get`, `create`, `update`, `delete`
//! - [`config`]: configuration CRUD, drafts, checks and deployment
//! - [`service`]: `notifications`, `health`, `catalog`
//!
//! ## Client Construction
//!
//! Every command builds its [`ProjectClient`] through
//! [`GlobalOptions::client`], which layers the config file, `PROJECT_*`
//! environment variables and `--service-url`.
//!
//! ## Exit Codes
//!
//! [`exit_code`] maps errors to the codes in [`crate::exit_codes`].

mod config;
mod project;
mod service;

pub use config::*;
pub use project::*;
pub use service::*;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::common::ApiError;
use crate::api::ProjectClient;
use crate::config::ServiceConfig;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

/// Manage projects and their configurations from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "proj",
    version,
    about = "Manage cloud projects and their configurations",
    long_about = "proj creates, inspects and deploys projects and project configurations.\n\n\
                  Credentials and the endpoint come from the config file and PROJECT_* \
                  environment variables.",
    after_help = "Use 'proj <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Service endpoint, overriding the config file and PROJECT_URL
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "PROJ_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.output).quiet(self.quiet)
    }

    /// Loads settings: config file, then environment, then flags.
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::load_from(path)?,
            None => ServiceConfig::load()?,
        };
        config.apply_env()?;
        if let Some(url) = &self.service_url {
            config.service_url = Some(url.clone());
        }
        Ok(config)
    }

    pub fn client(&self) -> Result<ProjectClient> {
        let options = self.load_config()?.client_options()?;
        debug!(
            service_url = %options.service_url,
            auth = options.authenticator.auth_type(),
            "building client"
        );
        Ok(ProjectClient::new(options)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a project
    Get(GetArgs),

    /// Create a project
    Create(CreateArgs),

    /// Update a project's name or description with JSON patch operations
    Update(UpdateArgs),

    /// Delete a project
    Delete(DeleteArgs),

    /// List the configurations of a project
    Configs(ConfigsArgs),

    /// Show a configuration
    Config(ConfigArgs),

    /// Delete a configuration
    DeleteConfig(DeleteConfigArgs),

    /// Compare the active and draft versions of a configuration
    ConfigDiff(ConfigDiffArgs),

    /// Merge a draft without waiting for validation
    ForceMerge(ForceMergeArgs),

    /// Merge or discard a draft
    DraftAction(DraftActionArgs),

    /// Validate a configuration
    Check(CheckArgs),

    /// Deploy a configuration
    Install(InstallArgs),

    /// Destroy the resources of a configuration
    Uninstall(UninstallArgs),

    /// Show the latest Schematics job of a configuration
    SchematicsJob(SchematicsJobArgs),

    /// Show the cost estimate of a configuration
    CostEstimate(CostEstimateArgs),

    /// List the events recorded against a project
    Notifications(NotificationsArgs),

    /// Check service health
    Health(HealthArgs),

    /// List the broker catalog
    Catalog(CatalogArgs),

    /// Print version information
    Version,
}

impl Commands {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match self {
            Commands::List(args) => args.run(global).await,
            Commands::Get(args) => args.run(global).await,
            Commands::Create(args) => args.run(global).await,
            Commands::Update(args) => args.run(global).await,
            Commands::Delete(args) => args.run(global).await,
            Commands::Configs(args) => args.run(global).await,
            Commands::Config(args) => args.run(global).await,
            Commands::DeleteConfig(args) => args.run(global).await,
            Commands::ConfigDiff(args) => args.run(global).await,
            Commands::ForceMerge(args) => args.run(global).await,
            Commands::DraftAction(args) => args.run(global).await,
            Commands::Check(args) => args.run(global).await,
            Commands::Install(args) => args.run(global).await,
            Commands::Uninstall(args) => args.run(global).await,
            Commands::SchematicsJob(args) => args.run(global).await,
            Commands::CostEstimate(args) => args.run(global).await,
            Commands::Notifications(args) => args.run(global).await,
            Commands::Health(args) => args.run(global).await,
            Commands::Catalog(args) => args.run(global).await,
            Commands::Version => {
                println!("{} version {}", crate::APP_NAME, crate::VERSION);
                Ok(())
            }
        }
    }
}

/// Maps a command failure to a process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(api_error) = error.downcast_ref::<ApiError>() else {
        return exit_codes::ERROR;
    };
    match api_error.status_code() {
        Some(401 | 403) => exit_codes::AUTH_ERROR,
        Some(404) => exit_codes::NOT_FOUND,
        Some(429) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases = [
            (ApiError::AuthFailed("expired".into()), exit_codes::AUTH_ERROR),
            (ApiError::Forbidden("denied".into()), exit_codes::AUTH_ERROR),
            (ApiError::NotFound("gone".into()), exit_codes::NOT_FOUND),
            (ApiError::RateLimited("slow down".into()), exit_codes::RATE_LIMIT),
            (
                ApiError::ServerError {
                    status: 500,
                    message: "boom".into(),
                },
                exit_codes::ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(exit_code(&anyhow::Error::new(error)), expected);
        }

        let wrapped = anyhow::Error::new(ApiError::NotFound("gone".into())).context("get failed");
        assert_eq!(exit_code(&wrapped), exit_codes::NOT_FOUND);
        assert_eq!(exit_code(&anyhow::anyhow!("bad flag")), exit_codes::ERROR);
    }

    #[test]
    fn test_service_url_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            service_url: Some("http://127.0.0.1:9".into()),
            config: Some(dir.path().join("missing.toml")),
            ..GlobalOptions::default()
        };
        let config = global.load_config().unwrap();
        assert_eq!(config.service_url.as_deref(), Some("http://127.0.0.1:9"));
    }
}
