//! Keyboard and pointer navigation on top of [`TreeView`].

use super::flat::NodeStatus;
use super::tree_view::TreeView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIntent {
    /// Left arrow or minus
    Collapse,
    /// Right arrow or plus
    Expand,
    /// Double click or click on the node marker
    Toggle,
}

/// What happened in response to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Reduced,
    Expanded,
    /// The caller should move its cursor to this row
    MoveCursor(usize),
    Nothing,
}

impl TreeView {
    pub fn navigate(&mut self, row: usize, intent: NavIntent) -> NavOutcome {
        let Some(status) = self.get_status(row) else {
            return NavOutcome::Nothing;
        };

        match (intent, status) {
            (NavIntent::Collapse | NavIntent::Toggle, NodeStatus::Expanded) => {
                if self.reduce_node(row) {
                    NavOutcome::Reduced
                } else {
                    NavOutcome::Nothing
                }
            }
            (NavIntent::Expand | NavIntent::Toggle, NodeStatus::Reduced) => {
                if self.expand_node(row) {
                    NavOutcome::Expanded
                } else {
                    NavOutcome::Nothing
                }
            }
            (NavIntent::Collapse, NodeStatus::Reduced | NodeStatus::Empty) => self
                .get_parent(row)
                .map_or(NavOutcome::Nothing, NavOutcome::MoveCursor),
            (NavIntent::Expand, NodeStatus::Expanded) => {
                let last = self.lines_total().saturating_sub(1);
                NavOutcome::MoveCursor((row + 1).min(last))
            }
            (NavIntent::Expand | NavIntent::Toggle, NodeStatus::Empty) => NavOutcome::Nothing,
        }
    }
}
