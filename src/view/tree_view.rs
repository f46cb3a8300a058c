//! Row-indexed facade over extraction and projection.

use super::extract::{ContainerOrigin, ShadowForest};
use super::filter::{CmpResultFilter, SyncPreviewFilter, ViewFilter};
use super::flat::{FlatTree, LineTarget, NodeStatus, ProjectionContext};
use super::sort::{ColumnType, SortOrder};
use crate::hierarchy::{Hierarchy, ObjectId, SharedHierarchy};
use crate::types::{ByteCount, ItemCount, Level, Percent};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Kind-specific data of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    Root {
        base_folder: ObjectId,
        display_name: String,
    },
    Directory {
        folder: ObjectId,
        name: String,
    },
    /// Files, then symlinks, of one folder that pass the current filter
    Files { items: Vec<ObjectId> },
}

/// Owned description of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLine {
    pub percent: Percent,
    pub bytes: ByteCount,
    pub item_count: ItemCount,
    pub level: Level,
    pub status: NodeStatus,
    #[serde(flatten)]
    pub kind: LineKind,
}

/// Navigation tree model: filtered aggregation of a comparison hierarchy,
/// exposed as a flat list of rows.
#[derive(Debug, Default)]
pub struct TreeView {
    hierarchy: Option<SharedHierarchy>,
    base_folders: Vec<ObjectId>,
    forest: ShadowForest,
    flat: FlatTree,
    filter: Option<ViewFilter>,
    sort: SortOrder,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Replace the backing hierarchy. Base folder pairs with both sides unset
    /// are ignored. Rows stay empty until the next filter update.
    pub fn set_data(&mut self, hierarchy: SharedHierarchy) {
        self.base_folders = {
            let h = hierarchy.read();
            h.base_folders()
                .iter()
                .copied()
                .filter(|&id| h.base_folder(id).is_some_and(|b| !b.is_null()))
                .collect()
        };
        debug!(base_folders = self.base_folders.len(), "Tree view data replaced");
        self.hierarchy = Some(hierarchy);
        self.forest = ShadowForest::default();
        self.flat.clear();
    }

    /// Apply `filter` and rebuild everything, keeping expanded rows expanded.
    pub fn update_filter(&mut self, filter: ViewFilter) {
        self.filter = Some(filter);
        let Some(store) = self.hierarchy.clone() else {
            return;
        };
        let h = store.read();
        let expanded = self.flat.expanded_objects(&self.forest, &h);
        self.forest = ShadowForest::build(&h, &self.base_folders, &filter);
        self.rebuild(&h, &expanded);
    }

    pub fn update_cmp_result(&mut self, filter: CmpResultFilter) {
        self.update_filter(filter.into());
    }

    pub fn update_sync_preview(&mut self, filter: SyncPreviewFilter) {
        self.update_filter(filter.into());
    }

    /// Change the sort order and re-project the current extraction.
    pub fn set_sort_direction(&mut self, column: ColumnType, ascending: bool) {
        self.sort = SortOrder { column, ascending };
        let Some(store) = self.hierarchy.clone() else {
            return;
        };
        let h = store.read();
        let expanded = self.flat.expanded_objects(&self.forest, &h);
        self.rebuild(&h, &expanded);
    }

    pub fn sort_direction(&self) -> SortOrder {
        self.sort
    }

    pub fn default_sort_direction(column: ColumnType) -> bool {
        column.default_ascending()
    }

    /// Header click on `column`.
    pub fn toggle_sort(&mut self, column: ColumnType) {
        let next = self.sort.toggled(column);
        self.set_sort_direction(next.column, next.ascending);
    }

    pub fn filter(&self) -> Option<&ViewFilter> {
        self.filter.as_ref()
    }

    fn rebuild(&mut self, hierarchy: &Hierarchy, expanded: &HashSet<ObjectId>) {
        let ctx = ProjectionContext {
            forest: &self.forest,
            hierarchy,
            order: self.sort,
        };
        let single_pair = self.base_folders.len() == 1;
        self.flat.rebuild(&ctx, single_pair, expanded);
        debug!(
            lines = self.flat.len(),
            expanded = expanded.len(),
            single_pair,
            "Tree view rebuilt"
        );
    }

    pub fn lines_total(&self) -> usize {
        self.flat.len()
    }

    pub fn get_status(&self, row: usize) -> Option<NodeStatus> {
        self.flat.status(row, &self.forest)
    }

    pub fn get_parent(&self, row: usize) -> Option<usize> {
        self.flat.parent(row)
    }

    /// Expand a reduced row. Anything else is ignored.
    pub fn expand_node(&mut self, row: usize) -> bool {
        let Some(store) = self.hierarchy.clone() else {
            debug!(row, "Expand requested without data");
            return false;
        };
        let h = store.read();
        let ctx = ProjectionContext {
            forest: &self.forest,
            hierarchy: &h,
            order: self.sort,
        };
        let expanded = self.flat.expand(row, &ctx);
        if !expanded {
            debug!(row, status = ?self.flat.status(row, &self.forest), "Ignoring expand request");
        }
        expanded
    }

    /// Collapse an expanded row. Anything else is ignored.
    pub fn reduce_node(&mut self, row: usize) -> bool {
        let reduced = self.flat.reduce(row);
        if !reduced {
            debug!(row, "Ignoring reduce request");
        }
        reduced
    }

    /// Expand every row down to `depth` levels (all levels for `None`).
    pub fn expand_to_depth(&mut self, depth: Option<Level>) {
        let mut row = 0;
        while row < self.flat.len() {
            let within = self
                .flat
                .line(row)
                .is_some_and(|line| depth.map_or(true, |d| line.level < d));
            if within && self.get_status(row) == Some(NodeStatus::Reduced) {
                self.expand_node(row);
            }
            row += 1;
        }
    }

    /// Describe `row`. `None` for rows out of range and for rows whose folder
    /// or representative file was removed from the hierarchy.
    pub fn get_line(&self, row: usize) -> Option<NodeLine> {
        let line = *self.flat.line(row)?;
        let status = self.flat.status(row, &self.forest)?;
        let node = self.forest.node(line.target.container())?;
        let cont = &node.container;
        let store = self.hierarchy.as_ref()?;
        let h = store.read();

        let (bytes, item_count, kind) = match (line.target, &node.origin) {
            (
                LineTarget::Root(_),
                ContainerOrigin::Root {
                    base_folder,
                    display_name,
                },
            ) => (
                cont.bytes_gross,
                cont.item_count_gross,
                LineKind::Root {
                    base_folder: *base_folder,
                    display_name: display_name.clone(),
                },
            ),
            (LineTarget::Directory(_), ContainerOrigin::Directory { folder }) => {
                let pair = h.folder(*folder)?;
                (
                    cont.bytes_gross,
                    cont.item_count_gross,
                    LineKind::Directory {
                        folder: *folder,
                        name: pair.item.pair_name().to_string(),
                    },
                )
            }
            (LineTarget::Files(_), origin) => {
                h.resolve(cont.first_file_id?)?;
                let children = h.children(origin.object())?;
                let filter = self.filter.unwrap_or_default();
                let files = children
                    .files
                    .iter()
                    .filter(|&&id| h.file(id).is_some_and(|f| filter.includes(&f.item)));
                let symlinks = children
                    .symlinks
                    .iter()
                    .filter(|&&id| h.symlink(id).is_some_and(|l| filter.includes(&l.item)));
                (
                    cont.bytes_net,
                    cont.item_count_net,
                    LineKind::Files {
                        items: files.chain(symlinks).copied().collect(),
                    },
                )
            }
            _ => return None,
        };

        Some(NodeLine {
            percent: line.percent,
            bytes,
            item_count,
            level: line.level,
            status,
            kind,
        })
    }

    /// All rows that currently resolve, in display order.
    pub fn lines(&self) -> Vec<NodeLine> {
        (0..self.lines_total()).filter_map(|row| self.get_line(row)).collect()
    }
}
