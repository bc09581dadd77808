// Integration tests for the binary search tree model

use proptest::prelude::*;
use tutortty::tree::{
    self, build, collect_edges, collect_nodes, compute_positions, contains, count, delete,
    find_min, inorder, insert, postorder, preorder, Link, DEFAULT_VALUES,
};

fn sample() -> Link {
    build(&DEFAULT_VALUES)
}

/// Every node's value lies strictly between the bounds handed down from its ancestors
fn is_search_tree(link: &Link, low: Option<i64>, high: Option<i64>) -> bool {
    match link {
        None => true,
        Some(node) => {
            low.map_or(true, |l| node.value > l)
                && high.map_or(true, |h| node.value < h)
                && is_search_tree(&node.left, low, Some(node.value))
                && is_search_tree(&node.right, Some(node.value), high)
        }
    }
}

#[test]
fn test_sample_traversals() {
    let root = sample();
    assert_eq!(inorder(&root), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(preorder(&root), vec![50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(postorder(&root), vec![20, 40, 30, 60, 80, 70, 50]);
}

#[test]
fn test_delete_node_with_two_children() {
    let root = delete(sample(), 30);
    assert_eq!(inorder(&root), vec![20, 40, 50, 60, 70, 80]);
    // in-order successor takes the deleted node's place
    let left = root.as_ref().and_then(|n| n.left.as_ref()).map(|n| n.value);
    assert_eq!(left, Some(40));
}

#[test]
fn test_delete_root() {
    let root = delete(sample(), 50);
    assert_eq!(root.as_ref().map(|n| n.value), Some(60));
    assert_eq!(inorder(&root), vec![20, 30, 40, 60, 70, 80]);
}

#[test]
fn test_duplicate_insert_and_absent_delete_are_noops() {
    let root = insert(sample(), 40);
    assert_eq!(count(&root), 7);
    let root = delete(root, 99);
    assert_eq!(inorder(&root), inorder(&sample()));
}

#[test]
fn test_delete_last_node_empties_tree() {
    let root = delete(build(&[7]), 7);
    assert!(root.is_none());
    assert!(inorder(&root).is_empty());
}

#[test]
fn test_find_min() {
    let root = sample();
    let node = root.as_deref().map(find_min).map(|n| n.value);
    assert_eq!(node, Some(20));
}

#[test]
fn test_layout_positions() {
    let mut root = sample();
    compute_positions(
        &mut root,
        tree::layout::ROOT_X,
        tree::layout::ROOT_Y,
        tree::layout::ROOT_SPACING,
    );
    let nodes = collect_nodes(&root);
    let at = |value: i64| {
        nodes
            .iter()
            .find(|n| n.value == value)
            .map(|n| (n.x, n.y))
            .unwrap()
    };
    assert_eq!(at(50), (400.0, 50.0));
    assert_eq!(at(30), (280.0, 130.0));
    assert_eq!(at(70), (520.0, 130.0));
    assert_eq!(at(20), (220.0, 210.0));
    assert_eq!(at(80), (580.0, 210.0));
    assert_eq!(collect_edges(&root).len(), 6);
}

proptest! {
    #[test]
    fn prop_inorder_is_sorted_and_deduplicated(values in prop::collection::vec(-500i64..500, 0..60)) {
        let root = build(&values);
        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(inorder(&root), expected.clone());
        prop_assert_eq!(count(&root), expected.len());
        prop_assert!(is_search_tree(&root, None, None));
    }

    #[test]
    fn prop_delete_removes_exactly_one_value(
        values in prop::collection::vec(-100i64..100, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = values[pick.index(values.len())];
        let before = count(&build(&values));
        let root = delete(build(&values), target);
        prop_assert!(!contains(&root, target));
        prop_assert_eq!(count(&root), before - 1);
        prop_assert!(is_search_tree(&root, None, None));
    }

    #[test]
    fn prop_deleting_absent_value_keeps_shape(
        values in prop::collection::vec(-100i64..100, 0..40),
        absent in prop_oneof![-300i64..-100, 100i64..300],
    ) {
        let mut root = build(&values);
        compute_positions(
            &mut root,
            tree::layout::ROOT_X,
            tree::layout::ROOT_Y,
            tree::layout::ROOT_SPACING,
        );
        prop_assert_eq!(delete(root.clone(), absent), root);
    }

    #[test]
    fn prop_inserting_present_value_keeps_shape(
        values in prop::collection::vec(-100i64..100, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let present = values[pick.index(values.len())];
        let mut root = build(&values);
        compute_positions(
            &mut root,
            tree::layout::ROOT_X,
            tree::layout::ROOT_Y,
            tree::layout::ROOT_SPACING,
        );
        prop_assert_eq!(insert(root.clone(), present), root);
    }

    #[test]
    fn prop_traversals_visit_every_node(values in prop::collection::vec(-50i64..50, 0..30)) {
        let root = build(&values);
        let mut pre = preorder(&root);
        let mut post = postorder(&root);
        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &inorder(&root));
        prop_assert_eq!(&post, &inorder(&root));
    }
}
