//! Serialized comparison results.
//!
//! A snapshot is the comparison engine's output written to disk (JSON, YAML or
//! TOML, picked by file extension). Loading it produces a [`Hierarchy`].

use super::arena::{Hierarchy, ObjectId};
use super::item::{CompareCategory, PairItem, SyncOperation};
use super::path::ItemPath;
use crate::error::ApiError;
use crate::types::ByteCount;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    #[serde(default)]
    pub base_folders: Vec<BaseFolderSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseFolderSnapshot {
    #[serde(default)]
    pub left: String,
    #[serde(default)]
    pub right: String,
    #[serde(default)]
    pub items: Vec<ItemSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Folder,
    File,
    Symlink,
}

/// One compared item. Fields that do not apply to the item's kind are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub kind: ItemKind,
    pub name: String,
    /// Right-side name when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_right: Option<String>,
    #[serde(default = "default_category")]
    pub category: CompareCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_operation: Option<SyncOperation>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_left: Option<ByteCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_right: Option<ByteCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSnapshot>,
}

fn default_category() -> CompareCategory {
    CompareCategory::Equal
}

fn default_true() -> bool {
    true
}

impl ItemSnapshot {
    fn pair_item(&self) -> PairItem {
        let sync_operation = self
            .sync_operation
            .unwrap_or_else(|| SyncOperation::implied_by(self.category));
        let right = self.name_right.clone().unwrap_or_else(|| self.name.clone());
        // one-sided items have no name on the missing side
        let (left, right) = match self.category {
            CompareCategory::LeftOnly => (Some(self.name.clone()), None),
            CompareCategory::RightOnly => (None, Some(right)),
            _ => (Some(self.name.clone()), Some(right)),
        };
        PairItem::new(self.name.clone(), self.category, sync_operation)
            .with_names(left, right)
            .with_active(self.active)
    }
}

impl ComparisonSnapshot {
    /// Read a snapshot file; the format follows the extension (`json`, `yaml`,
    /// `yml`, `toml`).
    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse_err =
            |e: &dyn std::fmt::Display| ApiError::SnapshotError(format!("{}: {}", path.display(), e));
        match extension.as_str() {
            "json" => serde_json::from_str(&text).map_err(|e| parse_err(&e)),
            "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| parse_err(&e)),
            "toml" => toml::from_str(&text).map_err(|e| parse_err(&e)),
            other => Err(ApiError::SnapshotError(format!(
                "Unsupported snapshot format '{}' (expected json, yaml or toml)",
                other
            ))),
        }
    }

    pub fn to_hierarchy(&self) -> Result<Hierarchy, ApiError> {
        let mut hierarchy = Hierarchy::new();
        for base in &self.base_folders {
            let id = hierarchy.add_base_folder(
                ItemPath::parse(&base.left),
                ItemPath::parse(&base.right),
            );
            add_items(&mut hierarchy, id, &base.items)?;
        }
        debug!(
            base_folders = self.base_folders.len(),
            objects = hierarchy.len(),
            "Loaded comparison snapshot"
        );
        Ok(hierarchy)
    }
}

fn add_items(
    hierarchy: &mut Hierarchy,
    parent: ObjectId,
    items: &[ItemSnapshot],
) -> Result<(), ApiError> {
    for item in items {
        match item.kind {
            ItemKind::Folder => {
                let id = hierarchy.add_folder(parent, item.pair_item())?;
                add_items(hierarchy, id, &item.items)?;
            }
            ItemKind::File => {
                hierarchy.add_file(parent, item.pair_item(), item.size_left, item.size_right)?;
            }
            ItemKind::Symlink => {
                hierarchy.add_symlink(parent, item.pair_item())?;
            }
        }
    }
    Ok(())
}
