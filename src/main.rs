//
//  project-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use project_sdk::cli::{exit_code, Cli};
use project_sdk::exit_codes;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments; clap exits with code 2 on usage errors
    let cli = Cli::parse();

    // Execute command
    let result = cli.command.run(&cli.global).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            cli.global.writer().write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging from PROJ_DEBUG, writing to stderr
fn init_logging() {
    let filter = EnvFilter::try_from_env("PROJ_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
