//
//  project-sdk
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Formatting Module
//!
//! Table building on top of `comfy_table`, plus helpers for the cell values
//! the CLI prints most: lifecycle states, booleans, timestamps and long text.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

/// Creates a table with the CLI's default styling.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for list tables.
///
/// ```rust,ignore
/// TableBuilder::new()
///     .headers(["ID", "Name"])
///     .row(["a1b2", "infra"])
///     .print();
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a project or configuration state.
pub fn format_state(state: &str, color: bool) -> String {
    if !color {
        return state.to_string();
    }

    match state.to_lowercase().as_str() {
        "active" | "approved" | "deployed" | "installed" | "validated" => {
            style(state).green().to_string()
        }
        "draft" | "validating" | "installing" | "uninstalling" | "deleting" | "updating" => {
            style(state).yellow().to_string()
        }
        s if s.ends_with("failed") || s == "deleted" => style(state).red().to_string(),
        _ => state.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    match (value, color) {
        (true, true) => style("Yes").green().to_string(),
        (false, true) => style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `...`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 8), "a lon...");
        assert_eq!(truncate("déploiement", 5), "dé...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_plain_formatting() {
        assert_eq!(format_state("INSTALL_FAILED", false), "INSTALL_FAILED");
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_timestamp(None), "-");

        let ts = Utc.with_ymd_and_hms(2023, 10, 5, 14, 3, 0).unwrap();
        assert_eq!(format_timestamp(Some(&ts)), "2023-10-05 14:03 UTC");
    }

    #[test]
    fn test_table_contains_rows() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["ID", "Name"])
            .rows([["p-1", "infra"], ["p-2", "apps"]])
            .build()
            .to_string();

        assert!(rendered.contains("ID"));
        assert!(rendered.contains("infra"));
        assert!(rendered.contains("p-2"));
    }
}
