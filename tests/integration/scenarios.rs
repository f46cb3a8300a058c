//! End-to-end behaviour of the tree view over a shared hierarchy.

use super::support::{two_pairs, TwoPairs};
use navtree::hierarchy::{CompareCategory, Hierarchy, PairItem, SyncOperation};
use navtree::view::{
    CmpResultFilter, ColumnType, LineKind, NodeStatus, SyncPreviewFilter, TreeView, ViewFilter,
};

fn hide_equal() -> CmpResultFilter {
    CmpResultFilter {
        equal: false,
        ..CmpResultFilter::default()
    }
}

fn view_of(pairs: TwoPairs, filter: ViewFilter) -> (TreeView, navtree::SharedHierarchy) {
    let store = pairs.hierarchy.into_shared();
    let mut view = TreeView::new();
    view.set_data(store.clone());
    view.update_filter(filter);
    (view, store)
}

#[test]
fn equal_pair_is_pruned_and_differing_pair_rolls_up() {
    let pairs = two_pairs();
    let (docs, work) = (pairs.docs, pairs.work);
    let (mut view, _store) = view_of(pairs, hide_equal().into());

    assert_eq!(view.lines_total(), 1);
    let root = view.get_line(0).unwrap();
    assert_eq!(
        root.kind,
        LineKind::Root {
            base_folder: docs,
            display_name: "docs".to_string()
        }
    );
    assert_eq!(root.bytes, 200);
    assert_eq!(root.item_count, 1);
    assert_eq!(root.percent, 100);
    assert_eq!(root.status, NodeStatus::Reduced);

    assert!(view.expand_node(0));
    assert_eq!(view.lines_total(), 2);
    let dir = view.get_line(1).unwrap();
    assert_eq!(
        dir.kind,
        LineKind::Directory {
            folder: work,
            name: "work".to_string()
        }
    );
    assert_eq!(dir.level, 1);
    assert_eq!(dir.bytes, 200);
    assert_eq!(dir.item_count, 1);
    assert_eq!(dir.percent, 100);
    // the only visible file sits directly in work/, which has no visible subfolder
    assert_eq!(dir.status, NodeStatus::Empty);
    assert_eq!(view.get_parent(1), Some(0));
}

#[test]
fn accept_all_shows_both_roots_with_percentages() {
    let pairs = two_pairs();
    let (docs, photos, readme) = (pairs.docs, pairs.photos, pairs.readme);
    let (mut view, _store) = view_of(pairs, ViewFilter::default());

    assert_eq!(view.lines_total(), 2);
    let first = view.get_line(0).unwrap();
    let second = view.get_line(1).unwrap();
    assert!(matches!(first.kind, LineKind::Root { base_folder, .. } if base_folder == docs));
    assert!(matches!(second.kind, LineKind::Root { base_folder, .. } if base_folder == photos));
    // gross bytes equal the sum of all file sizes (max of both sides)
    assert_eq!(first.bytes, 200 + 50 + 10 + 5);
    assert_eq!(second.bytes, 200);
    assert_eq!(first.item_count, 6);
    assert_eq!(second.item_count, 3);
    assert_eq!((first.percent, second.percent), (57, 43));

    view.expand_node(0);
    let files = view.get_line(2).unwrap();
    assert_eq!(files.kind, LineKind::Files { items: vec![readme] });
    assert_eq!(view.get_line(1).map(|l| l.percent), Some(98));
    assert_eq!(files.percent, 2);
}

#[test]
fn expansion_survives_filter_and_sort_changes() {
    let pairs = two_pairs();
    let (mut view, _store) = view_of(pairs, hide_equal().into());
    view.expand_node(0);
    assert_eq!(view.lines_total(), 2);

    view.update_filter(ViewFilter::default());
    // docs stays expanded: docs, work/, Files, photos
    assert_eq!(view.lines_total(), 4);
    assert_eq!(view.get_status(0), Some(NodeStatus::Expanded));
    assert_eq!(view.get_status(3), Some(NodeStatus::Reduced));

    view.set_sort_direction(ColumnType::FolderName, true);
    // docs < photos by name as well
    assert_eq!(view.lines_total(), 4);
    assert_eq!(view.get_status(0), Some(NodeStatus::Expanded));

    view.toggle_sort(ColumnType::FolderName);
    assert!(!view.sort_direction().ascending);
    assert_eq!(view.get_status(0), Some(NodeStatus::Reduced));
    assert_eq!(view.get_status(1), Some(NodeStatus::Expanded));
    assert!(matches!(
        view.get_line(1).map(|l| l.kind),
        Some(LineKind::Root { ref display_name, .. }) if display_name == "docs"
    ));
}

#[test]
fn removed_folder_becomes_unresolvable_and_drops_out_on_rebuild() {
    let pairs = two_pairs();
    let work = pairs.work;
    let (mut view, store) = view_of(pairs, ViewFilter::default());
    view.expand_node(0);
    assert_eq!(view.lines_total(), 4);

    store.write().remove(work).unwrap();
    assert!(view.get_line(1).is_none(), "stale folder must not resolve");
    assert!(view.get_line(0).is_some());

    view.update_filter(ViewFilter::default());
    // docs keeps only readme and drops behind photos; with no subfolder left
    // its files line is suppressed
    assert_eq!(view.lines_total(), 2);
    assert_eq!(view.get_line(1).map(|l| l.bytes), Some(5));
    assert_eq!(view.get_status(1), Some(NodeStatus::Empty));
}

#[test]
fn excluded_items_reappear_with_show_excluded() {
    let mut h = Hierarchy::new();
    let a = h.add_base_folder("/a".into(), "/b".into());
    let sub = h.add_folder(a, PairItem::new("sub", CompareCategory::Equal, SyncOperation::Equal))
        .unwrap();
    h.add_file(
        sub,
        PairItem::new("skip.tmp", CompareCategory::LeftOnly, SyncOperation::CreateNewRight)
            .with_active(false),
        Some(64),
        None,
    )
    .unwrap();
    h.add_file(
        sub,
        PairItem::new("keep.txt", CompareCategory::LeftOnly, SyncOperation::CreateNewRight),
        Some(16),
        None,
    )
    .unwrap();

    let mut view = TreeView::new();
    view.set_data(h.into_shared());
    view.update_sync_preview(SyncPreviewFilter {
        show_excluded: false,
        ..SyncPreviewFilter::default()
    });
    assert_eq!(view.get_line(0).map(|l| (l.bytes, l.item_count)), Some((16, 2)));

    view.update_sync_preview(SyncPreviewFilter::default());
    assert_eq!(view.get_line(0).map(|l| (l.bytes, l.item_count)), Some((80, 3)));
}

#[test]
fn expand_then_reduce_restores_rows() {
    let pairs = two_pairs();
    let (mut view, _store) = view_of(pairs, ViewFilter::default());

    for depth in [0, 1] {
        view.expand_to_depth(Some(depth));
        for row in 0..view.lines_total() {
            if view.get_status(row) != Some(NodeStatus::Reduced) {
                continue;
            }
            let before = view.lines();
            assert!(view.expand_node(row));
            assert_eq!(view.get_status(row), Some(NodeStatus::Expanded));
            assert!(view.reduce_node(row));
            assert_eq!(view.lines(), before, "row {row} at depth {depth}");
        }
    }
}

#[test]
fn empty_hierarchy_has_no_rows() {
    let mut view = TreeView::new();
    view.set_data(Hierarchy::new().into_shared());
    view.update_filter(ViewFilter::default());
    assert_eq!(view.lines_total(), 0);
    assert!(view.get_line(0).is_none());
    assert_eq!(view.get_parent(0), None);
}
