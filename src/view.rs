//! Navigation tree view: extraction, percentages, flat projection and the
//! row-indexed facade.

pub mod display_name;
pub mod extract;
pub mod filter;
pub mod flat;
pub mod natural;
pub mod navigation;
pub mod percent;
pub mod sort;
pub mod tree_view;

pub use display_name::short_name;
pub use extract::{Container, ContainerId, ContainerOrigin, ShadowForest};
pub use filter::{CmpResultFilter, SyncPreviewFilter, ViewFilter};
pub use flat::{FlatTree, LineTarget, NodeStatus, TreeLine};
pub use navigation::{NavIntent, NavOutcome};
pub use sort::{ColumnType, SortOrder};
pub use tree_view::{LineKind, NodeLine, TreeView};
