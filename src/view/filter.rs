//! View filters: which compared items the navigation tree shows.
//!
//! A filter is plain data. The view keeps the last one applied and evaluates
//! it again whenever it has to list the files behind a "Files" row.

use crate::hierarchy::{CompareCategory, PairItem, SyncOperation};
use serde::{Deserialize, Serialize};

/// Filter for the comparison result view: one flag per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmpResultFilter {
    pub show_excluded: bool,
    pub left_only: bool,
    pub right_only: bool,
    pub left_newer: bool,
    pub right_newer: bool,
    pub different: bool,
    /// Covers equal items and items differing only in metadata
    pub equal: bool,
    pub conflict: bool,
}

impl Default for CmpResultFilter {
    fn default() -> Self {
        Self {
            show_excluded: true,
            left_only: true,
            right_only: true,
            left_newer: true,
            right_newer: true,
            different: true,
            equal: true,
            conflict: true,
        }
    }
}

impl CmpResultFilter {
    pub fn includes(&self, item: &PairItem) -> bool {
        if !item.active && !self.show_excluded {
            return false;
        }
        match item.category {
            CompareCategory::LeftOnly => self.left_only,
            CompareCategory::RightOnly => self.right_only,
            CompareCategory::LeftNewer => self.left_newer,
            CompareCategory::RightNewer => self.right_newer,
            CompareCategory::DifferentContent => self.different,
            CompareCategory::Equal | CompareCategory::DifferentMetadata => self.equal,
            CompareCategory::Conflict => self.conflict,
        }
    }
}

/// Filter for the synchronization preview: one flag per operation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPreviewFilter {
    pub show_excluded: bool,
    pub create_left: bool,
    pub create_right: bool,
    pub delete_left: bool,
    pub delete_right: bool,
    /// Overwrite, metadata copy and move operations targeting the left side
    pub overwrite_left: bool,
    /// Overwrite, metadata copy and move operations targeting the right side
    pub overwrite_right: bool,
    pub do_nothing: bool,
    pub equal: bool,
    pub conflict: bool,
}

impl Default for SyncPreviewFilter {
    fn default() -> Self {
        Self {
            show_excluded: true,
            create_left: true,
            create_right: true,
            delete_left: true,
            delete_right: true,
            overwrite_left: true,
            overwrite_right: true,
            do_nothing: true,
            equal: true,
            conflict: true,
        }
    }
}

impl SyncPreviewFilter {
    pub fn includes(&self, item: &PairItem) -> bool {
        if !item.active && !self.show_excluded {
            return false;
        }
        match item.sync_operation {
            SyncOperation::CreateNewLeft => self.create_left,
            SyncOperation::CreateNewRight => self.create_right,
            SyncOperation::DeleteLeft => self.delete_left,
            SyncOperation::DeleteRight => self.delete_right,
            SyncOperation::OverwriteRight
            | SyncOperation::CopyMetadataToRight
            | SyncOperation::MoveRightFrom
            | SyncOperation::MoveRightTo => self.overwrite_right,
            SyncOperation::OverwriteLeft
            | SyncOperation::CopyMetadataToLeft
            | SyncOperation::MoveLeftFrom
            | SyncOperation::MoveLeftTo => self.overwrite_left,
            SyncOperation::DoNothing => self.do_nothing,
            SyncOperation::Equal => self.equal,
            SyncOperation::UnresolvedConflict => self.conflict,
        }
    }
}

/// The active view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewFilter {
    CmpResult(CmpResultFilter),
    SyncPreview(SyncPreviewFilter),
}

impl Default for ViewFilter {
    fn default() -> Self {
        ViewFilter::CmpResult(CmpResultFilter::default())
    }
}

impl ViewFilter {
    pub fn includes(&self, item: &PairItem) -> bool {
        match self {
            ViewFilter::CmpResult(filter) => filter.includes(item),
            ViewFilter::SyncPreview(filter) => filter.includes(item),
        }
    }
}

impl From<CmpResultFilter> for ViewFilter {
    fn from(filter: CmpResultFilter) -> Self {
        ViewFilter::CmpResult(filter)
    }
}

impl From<SyncPreviewFilter> for ViewFilter {
    fn from(filter: SyncPreviewFilter) -> Self {
        ViewFilter::SyncPreview(filter)
    }
}
