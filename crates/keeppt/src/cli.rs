//! Output formatting for the inspection commands

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use keeppt_core::{avatar_url, ShellConfig, UserId, NAVIGATION};

/// Navigation entries as a table, in display order
pub fn routes_table(no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Label", "Path", "Icon", "Color"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Label").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Icon").fg(Color::Cyan),
            Cell::new("Color").fg(Color::Cyan),
        ]);
    }

    for (index, entry) in NAVIGATION.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(entry.label),
            Cell::new(entry.path),
            Cell::new(entry.icon.name()),
            Cell::new(entry.color.name()),
        ]);
    }

    table
}

/// Navigation entries as pretty JSON
pub fn routes_json() -> Result<String> {
    serde_json::to_string_pretty(NAVIGATION).context("Failed to serialize navigation entries")
}

pub fn avatar_line(config: &ShellConfig, user_id: Option<&UserId>) -> String {
    avatar_url(&config.avatar_url_template, user_id)
}
