//! Binary search tree model behind the tree visualizer
//!
//! The tree is a plain owned structure: every [`TreeNode`] owns its children
//! through `Option<Box<TreeNode>>` and there are no parent pointers. The empty
//! tree is `None`. All operations are total functions; inserting a value that
//! is already present and deleting a value that is absent are both silent
//! no-ops.
//!
//! - [`node`]: the node type plus insert, delete and minimum lookup
//! - [`traversal`]: in-order, pre-order and post-order value sequences
//! - [`layout`]: display coordinates and node/edge flattening for the renderer

pub mod layout;
pub mod node;
pub mod traversal;

pub use layout::{collect_edges, collect_nodes, compute_positions};
pub use node::{build, contains, count, delete, find_min, insert, Link, TreeNode};
pub use traversal::{inorder, postorder, preorder, Traversal};

/// Values the tree visualizer starts from and resets to
pub const DEFAULT_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];
