//
//  project-sdk
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Small file helpers used by [`ServiceConfig`](super::ServiceConfig).
//!
//! ## Notes
//!
//! - Write operations create missing parent directories
//! - Errors carry the path that failed

use std::path::Path;

use anyhow::{Context, Result};

pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
