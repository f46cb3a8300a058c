//! Per-level ordering of tree lines.

use super::extract::ContainerOrigin;
use super::flat::{LineTarget, ProjectionContext, TreeLine};
use super::natural::natural_cmp;
use crate::types::{ByteCount, ItemCount};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Columns of the navigation tree; each one can serve as sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    FolderName,
    ItemCount,
    Bytes,
}

impl ColumnType {
    pub const ALL: [ColumnType; 3] = [ColumnType::FolderName, ColumnType::ItemCount, ColumnType::Bytes];

    /// Direction used when sorting by this column for the first time.
    pub fn default_ascending(self) -> bool {
        match self {
            ColumnType::FolderName => true,
            ColumnType::ItemCount | ColumnType::Bytes => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub column: ColumnType,
    pub ascending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            column: ColumnType::Bytes,
            ascending: false,
        }
    }
}

impl SortOrder {
    /// Order after clicking `column`'s header: the current column flips its
    /// direction, any other column starts with its default direction.
    pub fn toggled(self, column: ColumnType) -> Self {
        if column == self.column {
            Self {
                column,
                ascending: !self.ascending,
            }
        } else {
            Self {
                column,
                ascending: column.default_ascending(),
            }
        }
    }
}

fn bytes(ctx: &ProjectionContext<'_>, line: &TreeLine) -> ByteCount {
    match (line.target, ctx.forest.container(line.target.container())) {
        (_, None) => 0,
        (LineTarget::Root(_) | LineTarget::Directory(_), Some(c)) => c.bytes_gross,
        (LineTarget::Files(_), Some(c)) => c.bytes_net,
    }
}

fn item_count(ctx: &ProjectionContext<'_>, line: &TreeLine) -> ItemCount {
    match (line.target, ctx.forest.container(line.target.container())) {
        (_, None) => 0,
        (LineTarget::Root(_) | LineTarget::Directory(_), Some(c)) => c.item_count_gross,
        (LineTarget::Files(_), Some(c)) => c.item_count_net,
    }
}

/// Name shown for a root or directory line; `None` if the folder is gone.
fn name<'a>(ctx: &'a ProjectionContext<'a>, line: &TreeLine) -> Option<&'a str> {
    let node = ctx.forest.node(line.target.container())?;
    match (&line.target, &node.origin) {
        (LineTarget::Root(_), ContainerOrigin::Root { display_name, .. }) => {
            Some(display_name.as_str())
        }
        (LineTarget::Directory(_), ContainerOrigin::Directory { folder }) => {
            ctx.hierarchy.folder(*folder).map(|f| f.item.pair_name())
        }
        _ => None,
    }
}

fn kind_rank(target: LineTarget) -> u8 {
    match target {
        LineTarget::Root(_) => 0,
        LineTarget::Directory(_) => 1,
        LineTarget::Files(_) => 2,
    }
}

/// Ordering that holds in both directions: the "Files" line goes last, lines of
/// different kinds keep Root < Directory, and for name sorting folders that no
/// longer resolve go after the rest.
fn fixed_order(ctx: &ProjectionContext<'_>, lhs: &TreeLine, rhs: &TreeLine) -> Option<Ordering> {
    let (l_rank, r_rank) = (kind_rank(lhs.target), kind_rank(rhs.target));
    if l_rank == 2 || r_rank == 2 || l_rank != r_rank {
        return Some(l_rank.cmp(&r_rank));
    }
    if ctx.order.column == ColumnType::FolderName {
        match (name(ctx, lhs).is_some(), name(ctx, rhs).is_some()) {
            (false, false) => return Some(Ordering::Equal),
            (false, true) => return Some(Ordering::Greater),
            (true, false) => return Some(Ordering::Less),
            (true, true) => {}
        }
    }
    None
}

/// Sort one sibling set in place. Sorting is stable.
pub(crate) fn sort_single_level(ctx: &ProjectionContext<'_>, items: &mut [TreeLine]) {
    let order = ctx.order;
    items.sort_by(|lhs, rhs| {
        if let Some(fixed) = fixed_order(ctx, lhs, rhs) {
            return fixed;
        }
        let ord = match order.column {
            ColumnType::FolderName => natural_cmp(
                name(ctx, lhs).unwrap_or_default(),
                name(ctx, rhs).unwrap_or_default(),
            ),
            ColumnType::ItemCount => item_count(ctx, lhs).cmp(&item_count(ctx, rhs)),
            ColumnType::Bytes => bytes(ctx, lhs).cmp(&bytes(ctx, rhs)),
        };
        if order.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
