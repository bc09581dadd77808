//! Depth-first traversals used to drive the highlight playback

use super::node::Link;
use std::fmt;

/// The three depth-first orders offered by the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Inorder,
    Preorder,
    Postorder,
}

impl Traversal {
    /// Visit the tree in this order
    pub fn run(self, root: &Link) -> Vec<i64> {
        match self {
            Traversal::Inorder => inorder(root),
            Traversal::Preorder => preorder(root),
            Traversal::Postorder => postorder(root),
        }
    }

    /// Short description of the visiting order
    pub fn pattern(self) -> &'static str {
        match self {
            Traversal::Inorder => "L → Root → R",
            Traversal::Preorder => "Root → L → R",
            Traversal::Postorder => "L → R → Root",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Inorder => "Inorder",
            Traversal::Preorder => "Preorder",
            Traversal::Postorder => "Postorder",
        };
        f.write_str(name)
    }
}

pub fn inorder(root: &Link) -> Vec<i64> {
    fn walk(link: &Link, out: &mut Vec<i64>) {
        if let Some(node) = link {
            walk(&node.left, out);
            out.push(node.value);
            walk(&node.right, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn preorder(root: &Link) -> Vec<i64> {
    fn walk(link: &Link, out: &mut Vec<i64>) {
        if let Some(node) = link {
            out.push(node.value);
            walk(&node.left, out);
            walk(&node.right, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn postorder(root: &Link) -> Vec<i64> {
    fn walk(link: &Link, out: &mut Vec<i64>) {
        if let Some(node) = link {
            walk(&node.left, out);
            walk(&node.right, out);
            out.push(node.value);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}
