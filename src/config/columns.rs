//! Column layout of the navigation panel.

use crate::view::ColumnType;
use serde::{Deserialize, Serialize};

/// Layout of one navigation tree column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAttribute {
    pub column: ColumnType,
    /// Fixed width, or the width subtracted from the stretched share
    pub offset: i32,
    pub stretch: u32,
    pub visible: bool,
}

impl ColumnAttribute {
    pub fn new(column: ColumnType, offset: i32, stretch: u32, visible: bool) -> Self {
        Self {
            column,
            offset,
            stretch,
            visible,
        }
    }
}

/// The folder name column stretches, the numeric columns have a fixed width.
pub fn default_column_attributes() -> Vec<ColumnAttribute> {
    vec![
        ColumnAttribute::new(ColumnType::FolderName, -120, 1, true),
        ColumnAttribute::new(ColumnType::ItemCount, 60, 0, true),
        ColumnAttribute::new(ColumnType::Bytes, 60, 0, true),
    ]
}

/// Repair a user supplied column list: every column type appears exactly once
/// (first occurrence wins, missing ones are appended with their defaults) and
/// the folder name column is visible.
pub fn make_consistent(columns: &mut Vec<ColumnAttribute>) {
    let mut seen = Vec::with_capacity(ColumnType::ALL.len());
    columns.retain(|attr| {
        if seen.contains(&attr.column) {
            false
        } else {
            seen.push(attr.column);
            true
        }
    });

    for default in default_column_attributes() {
        if !seen.contains(&default.column) {
            columns.push(default);
        }
    }

    for attr in columns.iter_mut() {
        if attr.column == ColumnType::FolderName {
            attr.visible = true;
        }
    }
}
