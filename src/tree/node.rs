//! Tree nodes and the mutating operations

use std::cmp::Ordering;

/// An owned, possibly empty subtree
pub type Link = Option<Box<TreeNode>>;

/// A single node of the search tree
///
/// `x` and `y` are display coordinates. They are overwritten by
/// [`compute_positions`](super::compute_positions) before every paint and
/// carry no meaning for the tree itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Link,
    pub right: Link,
    pub x: f64,
    pub y: f64,
}

impl TreeNode {
    /// Create a detached leaf
    pub fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Insert `value`, returning the (possibly unchanged) root.
///
/// Equal values are ignored, so the tree never holds duplicates.
pub fn insert(root: Link, value: i64) -> Link {
    match root {
        None => Some(Box::new(TreeNode::leaf(value))),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = insert(node.left.take(), value),
                Ordering::Greater => node.right = insert(node.right.take(), value),
                Ordering::Equal => {}
            }
            Some(node)
        }
    }
}

/// Leftmost node of the subtree rooted at `node`
pub fn find_min(node: &TreeNode) -> &TreeNode {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// Delete `value`, returning the new root.
///
/// A node with two children takes its in-order successor's value, and the
/// successor is then deleted from the right subtree. Deleting a value that is
/// not in the tree leaves it untouched.
pub fn delete(root: Link, value: i64) -> Link {
    let mut node = root?;

    match value.cmp(&node.value) {
        Ordering::Less => {
            node.left = delete(node.left.take(), value);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete(node.right.take(), value);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(right)) => Some(right),
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                let successor = find_min(&right).value;
                node.value = successor;
                node.left = Some(left);
                node.right = delete(Some(right), successor);
                Some(node)
            }
        },
    }
}

/// Build a tree by inserting `values` in order
pub fn build(values: &[i64]) -> Link {
    values
        .iter()
        .fold(None, |root, &value| insert(root, value))
}

/// Number of nodes in the subtree
pub fn count(root: &Link) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// Whether `value` is stored in the tree
pub fn contains(root: &Link, value: i64) -> bool {
    let mut current = root.as_deref();
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return true,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_tree() {
        let root = insert(None, 7);
        let node = root.as_deref().unwrap();
        assert_eq!(node.value, 7);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_insert_places_smaller_left_and_larger_right() {
        let root = build(&[50, 30, 70]);
        let node = root.as_deref().unwrap();
        assert_eq!(node.left.as_ref().unwrap().value, 30);
        assert_eq!(node.right.as_ref().unwrap().value, 70);
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let root = build(&[50, 30, 70]);
        let again = insert(root.clone(), 30);
        assert_eq!(root, again);
        assert_eq!(count(&again), 3);
    }

    #[test]
    fn test_find_min_follows_left_chain() {
        let root = build(&[50, 30, 70, 20, 40, 10]);
        assert_eq!(find_min(root.as_deref().unwrap()).value, 10);

        let right = root.as_deref().unwrap().right.as_deref().unwrap();
        assert_eq!(find_min(right).value, 70);
    }

    #[test]
    fn test_delete_leaf() {
        let root = delete(build(&[50, 30, 70]), 70);
        assert_eq!(count(&root), 2);
        assert!(root.as_deref().unwrap().right.is_none());
    }

    #[test]
    fn test_delete_single_child_splices() {
        let root = delete(build(&[50, 30, 20]), 30);
        let node = root.as_deref().unwrap();
        assert_eq!(node.left.as_ref().unwrap().value, 20);
        assert_eq!(count(&root), 2);
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let root = delete(build(&[50, 30, 70, 20, 40, 60, 80]), 30);
        let left = root.as_deref().unwrap().left.as_deref().unwrap();
        assert_eq!(left.value, 40);
        assert_eq!(left.left.as_ref().unwrap().value, 20);
        assert!(left.right.is_none());
    }

    #[test]
    fn test_delete_root_of_single_node_tree() {
        assert!(delete(build(&[5]), 5).is_none());
    }

    #[test]
    fn test_delete_missing_value_is_noop() {
        let root = build(&[50, 30, 70]);
        assert_eq!(delete(root.clone(), 99), root);
        assert!(delete(None, 1).is_none());
    }

    #[test]
    fn test_contains() {
        let root = build(&[50, 30, 70, 20]);
        assert!(contains(&root, 20));
        assert!(!contains(&root, 25));
        assert!(!contains(&None, 0));
    }
}
