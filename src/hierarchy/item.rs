//! Node types of the comparison hierarchy.

use super::arena::ObjectId;
use super::path::ItemPath;
use crate::types::ByteCount;
use serde::{Deserialize, Serialize};

/// Result of comparing the left and right side of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareCategory {
    LeftOnly,
    RightOnly,
    LeftNewer,
    RightNewer,
    DifferentContent,
    Equal,
    DifferentMetadata,
    Conflict,
}

/// Operation the synchronization would perform on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOperation {
    CreateNewLeft,
    CreateNewRight,
    DeleteLeft,
    DeleteRight,
    OverwriteLeft,
    OverwriteRight,
    CopyMetadataToLeft,
    CopyMetadataToRight,
    MoveLeftFrom,
    MoveLeftTo,
    MoveRightFrom,
    MoveRightTo,
    DoNothing,
    Equal,
    UnresolvedConflict,
}

impl SyncOperation {
    /// Operation assumed when a snapshot does not name one.
    pub fn implied_by(category: CompareCategory) -> Self {
        match category {
            CompareCategory::Equal | CompareCategory::DifferentMetadata => SyncOperation::Equal,
            CompareCategory::Conflict => SyncOperation::UnresolvedConflict,
            _ => SyncOperation::DoNothing,
        }
    }
}

/// Attributes shared by every compared item (folder, file, symlink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairItem {
    pub name_left: Option<String>,
    pub name_right: Option<String>,
    pub category: CompareCategory,
    pub sync_operation: SyncOperation,
    /// `false` when the user excluded the item
    pub active: bool,
}

impl PairItem {
    /// Item with the same name on both sides.
    pub fn new(name: impl Into<String>, category: CompareCategory, sync_operation: SyncOperation) -> Self {
        let name = name.into();
        Self {
            name_left: Some(name.clone()),
            name_right: Some(name),
            category,
            sync_operation,
            active: true,
        }
    }

    pub fn with_names(mut self, left: Option<String>, right: Option<String>) -> Self {
        self.name_left = left;
        self.name_right = right;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Name shown for the pair: left name unless it is missing or empty.
    pub fn pair_name(&self) -> &str {
        match self.name_left.as_deref() {
            Some(left) if !left.is_empty() => left,
            _ => self.name_right.as_deref().unwrap_or(""),
        }
    }
}

/// Child handles owned by a base folder or folder, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children {
    pub folders: Vec<ObjectId>,
    pub files: Vec<ObjectId>,
    pub symlinks: Vec<ObjectId>,
}

impl Children {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty() && self.symlinks.is_empty()
    }

    pub(crate) fn detach(&mut self, id: ObjectId) {
        self.folders.retain(|c| *c != id);
        self.files.retain(|c| *c != id);
        self.symlinks.retain(|c| *c != id);
    }
}

/// Root of one comparison: a left/right base path pair.
#[derive(Debug, Clone)]
pub struct BaseFolderPair {
    pub left: ItemPath,
    pub right: ItemPath,
    pub(crate) children: Children,
}

impl BaseFolderPair {
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Both sides are unset; such pairs never reach the view.
    pub fn is_null(&self) -> bool {
        self.left.is_null() && self.right.is_null()
    }
}

#[derive(Debug, Clone)]
pub struct FolderPair {
    pub item: PairItem,
    pub(crate) parent: ObjectId,
    pub(crate) children: Children,
}

impl FolderPair {
    pub fn children(&self) -> &Children {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct FilePair {
    pub item: PairItem,
    pub(crate) parent: ObjectId,
    pub size_left: Option<ByteCount>,
    pub size_right: Option<ByteCount>,
}

impl FilePair {
    /// Size used for rollups: the larger side (file-browser semantics, independent
    /// of the sync direction).
    pub fn view_bytes(&self) -> ByteCount {
        self.size_left.unwrap_or(0).max(self.size_right.unwrap_or(0))
    }
}

#[derive(Debug, Clone)]
pub struct SymlinkPair {
    pub item: PairItem,
    pub(crate) parent: ObjectId,
}

/// A node of the comparison hierarchy.
#[derive(Debug, Clone)]
pub enum FsObject {
    BaseFolder(BaseFolderPair),
    Folder(FolderPair),
    File(FilePair),
    Symlink(SymlinkPair),
}

impl FsObject {
    /// Children of a base folder or folder; `None` for leaves.
    pub fn children(&self) -> Option<&Children> {
        match self {
            FsObject::BaseFolder(base) => Some(&base.children),
            FsObject::Folder(folder) => Some(&folder.children),
            FsObject::File(_) | FsObject::Symlink(_) => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            FsObject::BaseFolder(base) => Some(&mut base.children),
            FsObject::Folder(folder) => Some(&mut folder.children),
            FsObject::File(_) | FsObject::Symlink(_) => None,
        }
    }

    pub fn pair_item(&self) -> Option<&PairItem> {
        match self {
            FsObject::BaseFolder(_) => None,
            FsObject::Folder(folder) => Some(&folder.item),
            FsObject::File(file) => Some(&file.item),
            FsObject::Symlink(link) => Some(&link.item),
        }
    }

    pub(crate) fn pair_item_mut(&mut self) -> Option<&mut PairItem> {
        match self {
            FsObject::BaseFolder(_) => None,
            FsObject::Folder(folder) => Some(&mut folder.item),
            FsObject::File(file) => Some(&mut file.item),
            FsObject::Symlink(link) => Some(&mut link.item),
        }
    }

    /// Owning base folder or folder; `None` for base folders.
    pub fn parent(&self) -> Option<ObjectId> {
        match self {
            FsObject::BaseFolder(_) => None,
            FsObject::Folder(folder) => Some(folder.parent),
            FsObject::File(file) => Some(file.parent),
            FsObject::Symlink(link) => Some(link.parent),
        }
    }
}
