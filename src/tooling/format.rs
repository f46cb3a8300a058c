//! Format tree view rows as a text table or JSON.

use crate::config::ColumnAttribute;
use crate::error::ApiError;
use crate::view::{ColumnType, LineKind, NodeLine, NodeStatus, SortOrder, ViewFilter};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{CellAlignment, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Human readable byte count with binary units.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;
    const TB: u64 = 1024 * GB;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn marker(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Expanded => "\u{25be} ",
        NodeStatus::Reduced => "\u{25b8} ",
        NodeStatus::Empty => "  ",
    }
}

fn name_cell(line: &NodeLine) -> String {
    let label = match &line.kind {
        LineKind::Root { display_name, .. } => display_name.clone(),
        LineKind::Directory { name, .. } => name.clone(),
        LineKind::Files { .. } => "Files".to_string(),
    };
    format!("{}{}{}", "  ".repeat(line.level), marker(line.status), label)
}

fn header(column: ColumnType) -> &'static str {
    match column {
        ColumnType::FolderName => "Name",
        ColumnType::ItemCount => "Items",
        ColumnType::Bytes => "Size",
    }
}

/// Render rows as a table. Columns follow `columns` (hidden ones are skipped);
/// the percentage goes right after the name.
pub fn format_tree_text(lines: &[NodeLine], columns: &[ColumnAttribute], show_percentage: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Navigation")));
    if lines.is_empty() {
        out.push_str("No differences to show.\n");
        return out;
    }

    let visible: Vec<ColumnType> = columns.iter().filter(|c| c.visible).map(|c| c.column).collect();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    let mut headers = Vec::new();
    for column in &visible {
        headers.push(header(*column));
        if *column == ColumnType::FolderName && show_percentage {
            headers.push("%");
        }
    }
    table.set_header(headers);

    for line in lines {
        let mut row = Vec::new();
        for column in &visible {
            match column {
                ColumnType::FolderName => {
                    row.push(name_cell(line));
                    if show_percentage {
                        row.push(format!("{}%", line.percent));
                    }
                }
                ColumnType::ItemCount => row.push(line.item_count.to_string()),
                ColumnType::Bytes => row.push(format_size(line.bytes)),
            }
        }
        table.add_row(row);
    }

    for (index, column) in table.column_iter_mut().enumerate() {
        if index > 0 {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    out.push_str(&format!("{}\n", table));
    out
}

#[derive(Serialize)]
struct TreeReport<'a> {
    sort: SortOrder,
    filter: Option<&'a ViewFilter>,
    lines: &'a [NodeLine],
}

/// Render rows plus the active sort order and filter as pretty JSON.
pub fn format_tree_json(
    lines: &[NodeLine],
    sort: SortOrder,
    filter: Option<&ViewFilter>,
) -> Result<String, ApiError> {
    serde_json::to_string_pretty(&TreeReport { sort, filter, lines })
        .map_err(|e| ApiError::SerializationError(format!("Failed to serialize report: {}", e)))
}
