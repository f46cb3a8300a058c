//! Flat projection of the shadow forest.
//!
//! The list only stores level, percentage and the container a row stands for.
//! Whether a row is expanded is read off the list itself: a row is expanded
//! iff the row after it is deeper.

use super::extract::{ContainerId, ShadowForest};
use super::percent::allocate;
use super::sort::{sort_single_level, SortOrder};
use crate::hierarchy::{Hierarchy, ObjectId};
use crate::types::{Level, Percent};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a row of the flat list represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTarget {
    Root(ContainerId),
    Directory(ContainerId),
    /// The direct files of the given container
    Files(ContainerId),
}

impl LineTarget {
    pub fn container(&self) -> ContainerId {
        match *self {
            LineTarget::Root(id) | LineTarget::Directory(id) | LineTarget::Files(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine {
    pub level: Level,
    pub percent: Percent,
    pub target: LineTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Expanded,
    Reduced,
    Empty,
}

/// Everything needed to create and order rows.
pub struct ProjectionContext<'a> {
    pub forest: &'a ShadowForest,
    pub hierarchy: &'a Hierarchy,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTree {
    lines: Vec<TreeLine>,
}

impl FlatTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, row: usize) -> Option<&TreeLine> {
        self.lines.get(row)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// One level of rows below container `id`, with percentages relative to
    /// the sibling set, sorted.
    pub fn children(ctx: &ProjectionContext<'_>, id: ContainerId, level: Level) -> Vec<TreeLine> {
        let Some(cont) = ctx.forest.container(id) else {
            return Vec::new();
        };

        let mut targets: Vec<(LineTarget, u64)> = cont
            .sub_dirs
            .iter()
            .map(|&sub| {
                let bytes = ctx.forest.container(sub).map_or(0, |c| c.bytes_gross);
                (LineTarget::Directory(sub), bytes)
            })
            .collect();
        if cont.first_file_id.is_some() {
            targets.push((LineTarget::Files(id), cont.bytes_net));
        }

        Self::weighted_lines(ctx, targets, level)
    }

    fn weighted_lines(
        ctx: &ProjectionContext<'_>,
        targets: Vec<(LineTarget, u64)>,
        level: Level,
    ) -> Vec<TreeLine> {
        let weights: Vec<u64> = targets.iter().map(|(_, w)| *w).collect();
        let mut lines: Vec<TreeLine> = targets
            .into_iter()
            .zip(allocate(&weights))
            .map(|((target, _), percent)| TreeLine {
                level,
                percent,
                target,
            })
            .collect();
        sort_single_level(ctx, &mut lines);
        lines
    }

    fn top_level(ctx: &ProjectionContext<'_>, single_pair: bool) -> Vec<TreeLine> {
        let roots = ctx.forest.roots();
        if single_pair {
            return roots
                .first()
                .map(|&root| Self::children(ctx, root, 0))
                .unwrap_or_default();
        }
        let targets = roots
            .iter()
            .map(|&root| {
                let bytes = ctx.forest.container(root).map_or(0, |c| c.bytes_gross);
                (LineTarget::Root(root), bytes)
            })
            .collect();
        Self::weighted_lines(ctx, targets, 0)
    }

    /// Positional status of `row`; `None` for rows out of range.
    pub fn status(&self, row: usize, forest: &ShadowForest) -> Option<NodeStatus> {
        let line = self.lines.get(row)?;
        if let Some(next) = self.lines.get(row + 1) {
            if next.level > line.level {
                return Some(NodeStatus::Expanded);
            }
        }
        let status = match line.target {
            LineTarget::Files(_) => NodeStatus::Empty,
            LineTarget::Root(id) | LineTarget::Directory(id) => {
                if forest.container(id).is_some_and(|c| c.has_children()) {
                    NodeStatus::Reduced
                } else {
                    NodeStatus::Empty
                }
            }
        };
        Some(status)
    }

    /// Splice the children of a reduced row in after it. Returns `false` and
    /// leaves the list untouched for any other row.
    pub fn expand(&mut self, row: usize, ctx: &ProjectionContext<'_>) -> bool {
        if self.status(row, ctx.forest) != Some(NodeStatus::Reduced) {
            return false;
        }
        let line = self.lines[row];
        let children = Self::children(ctx, line.target.container(), line.level + 1);
        self.lines.splice(row + 1..row + 1, children);
        true
    }

    /// Drop the expanded subtree below `row`. Returns `false` if there was
    /// nothing to drop.
    pub fn reduce(&mut self, row: usize) -> bool {
        let Some(line) = self.lines.get(row) else {
            return false;
        };
        let level = line.level;
        let end = self.lines[row + 1..]
            .iter()
            .position(|l| l.level <= level)
            .map_or(self.lines.len(), |offset| row + 1 + offset);
        if end == row + 1 {
            return false;
        }
        self.lines.drain(row + 1..end);
        true
    }

    /// Nearest preceding row with a smaller level.
    pub fn parent(&self, row: usize) -> Option<usize> {
        let level = self.lines.get(row)?.level;
        (0..row).rev().find(|&i| self.lines[i].level < level)
    }

    /// Hierarchy objects of all expanded rows. Directories whose folder no
    /// longer resolves are left out.
    pub fn expanded_objects(&self, forest: &ShadowForest, hierarchy: &Hierarchy) -> HashSet<ObjectId> {
        self.lines
            .windows(2)
            .filter(|pair| pair[1].level > pair[0].level)
            .filter_map(|pair| match pair[0].target {
                LineTarget::Root(id) => forest.node(id).map(|n| n.origin.object()),
                LineTarget::Directory(id) => forest
                    .node(id)
                    .map(|n| n.origin.object())
                    .filter(|folder| hierarchy.folder(*folder).is_some()),
                LineTarget::Files(_) => None,
            })
            .collect()
    }

    /// Replace the list with a fresh top level and re-expand every row whose
    /// object is in `expanded`. Spliced rows are visited as well, so nested
    /// expansion comes back level by level.
    pub fn rebuild(&mut self, ctx: &ProjectionContext<'_>, single_pair: bool, expanded: &HashSet<ObjectId>) {
        self.lines = Self::top_level(ctx, single_pair);
        if expanded.is_empty() {
            return;
        }

        let mut row = 0;
        while row < self.lines.len() {
            let line = self.lines[row];
            let object = match line.target {
                LineTarget::Root(id) | LineTarget::Directory(id) => ctx.forest.node(id).map(|n| n.origin.object()),
                LineTarget::Files(_) => None,
            };
            if object.is_some_and(|o| expanded.contains(&o)) {
                self.expand(row, ctx);
            }
            row += 1;
        }
    }
}
