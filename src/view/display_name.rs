//! Short display names for base folder pairs.

use super::natural::natural_eq;
use crate::hierarchy::ItemPath;

/// Separator between two unrelated folder names.
pub const SPACED_DASH: &str = " \u{2013} ";

fn last_component(path: &ItemPath) -> String {
    if path.parent().is_none() {
        // device root: nothing shorter to show
        return path.display();
    }
    path.item_name().to_string()
}

/// Derive a compact name for a left/right folder pair.
///
/// Asymmetric pairs such as `C:\A\X` and `D:\B\X` share a trailing path and are
/// named by it (`X`). Unrelated pairs get both last components joined by an
/// en dash; if one side is unset only the other side is named.
pub fn short_name(left: &ItemPath, right: &ItemPath) -> String {
    let mut common_trail: Vec<String> = Vec::new();
    let mut tmp_left = left.clone();
    let mut tmp_right = right.clone();

    while let (Some(parent_left), Some(parent_right)) = (tmp_left.parent(), tmp_right.parent()) {
        if !natural_eq(tmp_left.item_name(), tmp_right.item_name()) {
            break;
        }
        common_trail.push(tmp_left.item_name().to_string());
        tmp_left = parent_left;
        tmp_right = parent_right;
    }

    if !common_trail.is_empty() {
        common_trail.reverse();
        return common_trail.join(&left.separator().to_string());
    }

    if left.is_null() {
        last_component(right)
    } else if right.is_null() {
        last_component(left)
    } else {
        format!("{}{}{}", last_component(left), SPACED_DASH, last_component(right))
    }
}
