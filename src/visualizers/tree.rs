//! Binary search tree widget

use crate::animation::{Animator, Cue, Mark, TRAVERSAL_STEP};
use crate::tree::{self, layout, Link, Traversal};
use std::time::Instant;
use tracing::info;

pub struct TreeVisualizer {
    root: Link,
    initial: Vec<i64>,
    animator: Animator<()>,
}

impl TreeVisualizer {
    pub fn new(initial: Vec<i64>) -> Self {
        TreeVisualizer {
            root: tree::build(&initial),
            initial,
            animator: Animator::new(),
        }
    }

    pub fn root(&self) -> &Link {
        &self.root
    }

    pub fn animator(&self) -> &Animator<()> {
        &self.animator
    }

    pub fn node_count(&self) -> usize {
        tree::count(&self.root)
    }

    /// Recompute display coordinates and hand back the tree for painting
    pub fn layout(&mut self) -> &Link {
        layout::compute_positions(
            &mut self.root,
            layout::ROOT_X,
            layout::ROOT_Y,
            layout::ROOT_SPACING,
        );
        &self.root
    }

    pub fn insert(&mut self, value: i64, now: Instant) {
        info!(value, "tree insert");
        self.animator
            .start(Cue::message(format!("Inserting {} into tree...", value)), now);
        self.root = tree::insert(self.root.take(), value);
    }

    pub fn delete(&mut self, value: i64, now: Instant) {
        info!(value, "tree delete");
        self.animator
            .start(Cue::message(format!("Deleting {} from tree...", value)), now);
        self.root = tree::delete(self.root.take(), value);
    }

    /// Play `order` back one node at a time
    pub fn traverse(&mut self, order: Traversal, now: Instant) {
        if self.root.is_none() {
            self.animator
                .start(Cue::message("Tree is empty! Insert nodes first."), now);
            return;
        }

        let values = order.run(&self.root);
        let path = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        let steps = values.into_iter().map(Mark::Value).collect();

        self.animator.start(
            Cue::message(format!("{} Traversal: {}", order, path))
                .steps(steps, TRAVERSAL_STEP)
                .keep_last_step(),
            now,
        );
    }

    pub fn reset(&mut self, now: Instant) {
        self.animator.start(Cue::message("Tree reset!"), now);
        self.root = tree::build(&self.initial);
    }

    pub fn tick(&mut self, now: Instant) {
        self.animator.tick(now);
    }

    /// Value highlighted at `now`
    pub fn highlighted(&self, now: Instant) -> Option<i64> {
        match self.animator.mark(now) {
            Some(Mark::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Traversal values already played at `now`
    pub fn visited(&self, now: Instant) -> Vec<i64> {
        self.animator
            .visited(now)
            .iter()
            .filter_map(|mark| match mark {
                Mark::Value(value) => Some(*value),
                _ => None,
            })
            .collect()
    }
}
