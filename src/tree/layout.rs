//! Display layout for the tree renderer
//!
//! Coordinates live in a fixed 800 x 500 logical plane with `y` growing
//! downward. The renderer maps that plane onto whatever terminal area it gets.

use super::node::{Link, TreeNode};

/// Horizontal centre of the root
pub const ROOT_X: f64 = 400.0;
/// Vertical position of the root
pub const ROOT_Y: f64 = 50.0;
/// Horizontal offset of the root's children; halves every level
pub const ROOT_SPACING: f64 = 120.0;
/// Vertical distance between levels
pub const LEVEL_HEIGHT: f64 = 80.0;

/// Assign `(x, y)` to every node, pre-order.
///
/// The node at `root` lands on `(x, y)`, its children `spacing` to either side
/// and one level lower, with the spacing halved for the next level.
pub fn compute_positions(root: &mut Link, x: f64, y: f64, spacing: f64) {
    let Some(node) = root.as_deref_mut() else {
        return;
    };
    node.x = x;
    node.y = y;
    compute_positions(&mut node.left, x - spacing, y + LEVEL_HEIGHT, spacing / 2.0);
    compute_positions(&mut node.right, x + spacing, y + LEVEL_HEIGHT, spacing / 2.0);
}

/// Flatten the tree into its nodes, pre-order
pub fn collect_nodes(root: &Link) -> Vec<&TreeNode> {
    fn walk<'a>(link: &'a Link, out: &mut Vec<&'a TreeNode>) {
        if let Some(node) = link.as_deref() {
            out.push(node);
            walk(&node.left, out);
            walk(&node.right, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Flatten the tree into `(parent, child)` pairs, pre-order
pub fn collect_edges(root: &Link) -> Vec<(&TreeNode, &TreeNode)> {
    fn walk<'a>(link: &'a Link, out: &mut Vec<(&'a TreeNode, &'a TreeNode)>) {
        let Some(node) = link.as_deref() else {
            return;
        };
        if let Some(left) = node.left.as_deref() {
            out.push((node, left));
            walk(&node.left, out);
        }
        if let Some(right) = node.right.as_deref() {
            out.push((node, right));
            walk(&node.right, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}
