//! navtree: Aggregated Navigation Tree for Folder Comparison Results
//!
//! Takes the result of a two-way folder comparison, filters it by comparison
//! category or planned sync operation, rolls up byte and item counts per
//! folder and exposes the outcome as a flat, sortable list of rows that can be
//! expanded and collapsed lazily.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod logging;
pub mod tooling;
pub mod types;
pub mod view;

pub use error::{ApiError, HierarchyError};
pub use hierarchy::{ComparisonSnapshot, Hierarchy, ObjectId, SharedHierarchy};
pub use view::{NodeLine, NodeStatus, TreeView, ViewFilter};
