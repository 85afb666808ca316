//
//  project-sdk
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `proj` CLI, supporting three formats:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting and automation
//! - **YAML format**: Machine-readable YAML
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Types that render themselves as a detail view
//! - [`TableRow`]: Types that render as one row of a list table
//!
//! ## Status Lines
//!
//! Operations without a response body print `OK`. Failures print `FAILED`
//! followed by the error message on stderr. `--quiet` suppresses `OK` and
//! informational lines but never errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use project_sdk::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json).quiet(true);
//! writer.write(&project)?;
//! writer.write_list(&projects)?;
//! writer.write_ok();
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::io;

use clap::ValueEnum;
use console::style;
use serde::Serialize;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and field lists (default).
    #[default]
    Table,

    /// Pretty-printed JSON.
    Json,

    /// YAML.
    Yaml,
}

/// Writes command results to stdout and status lines to stderr.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`. Color follows the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Writes a single value in the configured format.
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_to(&mut io::stdout().lock(), value),
            OutputFormat::Yaml => write_yaml_to(&mut io::stdout().lock(), value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    /// Writes a list of values. In table format the list becomes one table.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json_to(&mut io::stdout().lock(), values),
            OutputFormat::Yaml => write_yaml_to(&mut io::stdout().lock(), values),
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results found.");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::HEADERS.iter().copied())
                    .rows(values.iter().map(|value| value.row(self.color)))
                    .print();
                Ok(())
            }
        }
    }

    /// Prints `FAILED` and the message to stderr.
    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{}", style("FAILED").red().bold());
        } else {
            eprintln!("FAILED");
        }
        eprintln!("{msg}");
    }

    pub fn write_warning(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {msg}");
        }
    }

    /// Informational line on stderr, so stdout stays parseable.
    pub fn write_info(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }

    /// Prints `OK` for operations that return no body.
    pub fn write_ok(&self) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{}", style("OK").green().bold());
        } else {
            println!("OK");
        }
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

/// A value with a human-readable detail view.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value shown as one row of a list table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

pub fn print_header(text: &str, color: bool) {
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{text}");
    }
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    if color {
        println!("{:<14} {}", style(format!("{key}:")).dim(), value);
    } else {
        println!("{:<14} {}", format!("{key}:"), value);
    }
}
