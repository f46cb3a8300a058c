//! Comparison Result Store
//!
//! The forest of base-folder comparison results the navigation view is built
//! from. Every folder, file and symlink lives in a generation-checked arena and
//! is addressed by an [`ObjectId`]; handles outlive removals and simply stop
//! resolving once the object they named is gone.

mod arena;
mod item;
mod path;
pub mod snapshot;

pub use arena::{Hierarchy, ObjectId, SharedHierarchy};
pub use item::{
    BaseFolderPair, Children, CompareCategory, FilePair, FolderPair, FsObject, PairItem,
    SymlinkPair, SyncOperation,
};
pub use path::ItemPath;
pub use snapshot::ComparisonSnapshot;
