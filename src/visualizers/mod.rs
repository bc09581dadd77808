//! Interactive data structure widgets
//!
//! Each widget owns its container and an [`Animator`](crate::animation::Animator).
//! Commands never fail: bad input (an empty pop, an out-of-range index, a
//! value that is not there) only produces a status message. Removals are
//! deferred: the element is highlighted first and taken out when the cue ends.
//!
//! - [`tree`]: binary search tree with insert/delete/traversal playback
//! - [`array`]: push, pop, insert/delete at index, O(1) access
//! - [`stack`]: LIFO push, pop, peek
//! - [`queue`]: FIFO enqueue, dequeue, front/rear peeks
//! - [`linked_list`]: head/tail insert, delete by value, stepped search and traversal

pub mod array;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod tree;

pub use array::ArrayVisualizer;
pub use linked_list::LinkedListVisualizer;
pub use queue::QueueVisualizer;
pub use stack::StackVisualizer;
pub use tree::TreeVisualizer;

use clap::ValueEnum;
use std::fmt;
use std::time::Instant;

/// Which widget to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VisualizerKind {
    Tree,
    Array,
    Stack,
    Queue,
    LinkedList,
}

impl VisualizerKind {
    pub const ALL: [VisualizerKind; 5] = [
        VisualizerKind::Array,
        VisualizerKind::Stack,
        VisualizerKind::Queue,
        VisualizerKind::LinkedList,
        VisualizerKind::Tree,
    ];

    pub fn title(self) -> &'static str {
        match self {
            VisualizerKind::Tree => "Binary Search Tree",
            VisualizerKind::Array => "Array",
            VisualizerKind::Stack => "Stack (LIFO)",
            VisualizerKind::Queue => "Queue (FIFO)",
            VisualizerKind::LinkedList => "Linked List",
        }
    }

    /// Values the widget starts from and resets to
    pub fn default_values(self) -> &'static [i64] {
        match self {
            VisualizerKind::Tree => &crate::tree::DEFAULT_VALUES,
            VisualizerKind::Array => &[10, 20, 30, 40, 50],
            VisualizerKind::Stack | VisualizerKind::Queue | VisualizerKind::LinkedList => {
                &[10, 20, 30]
            }
        }
    }

    /// Cost summary shown under the widget
    pub fn complexity(self) -> &'static [(&'static str, &'static str)] {
        match self {
            VisualizerKind::Tree => &[
                ("Search", "O(log n) avg"),
                ("Insert", "O(log n) avg"),
                ("Delete", "O(log n) avg"),
            ],
            VisualizerKind::Array => &[("Access", "O(1)"), ("Insert/Delete", "O(n)")],
            VisualizerKind::Stack => &[("Push/Pop", "O(1)"), ("Peek", "O(1)")],
            VisualizerKind::Queue => &[("Enqueue/Dequeue", "O(1)"), ("Front/Rear", "O(1)")],
            VisualizerKind::LinkedList => &[
                ("Access", "O(n)"),
                ("Insert/Delete at Head", "O(1)"),
                ("Search", "O(n)"),
            ],
        }
    }
}

impl fmt::Display for VisualizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One open widget
pub enum Visualizer {
    Tree(TreeVisualizer),
    Array(ArrayVisualizer),
    Stack(StackVisualizer),
    Queue(QueueVisualizer),
    LinkedList(LinkedListVisualizer),
}

impl Visualizer {
    /// Open `kind`, seeded with `values` or the widget's defaults
    pub fn open(kind: VisualizerKind, values: Option<Vec<i64>>) -> Self {
        let values = values.unwrap_or_else(|| kind.default_values().to_vec());
        match kind {
            VisualizerKind::Tree => Visualizer::Tree(TreeVisualizer::new(values)),
            VisualizerKind::Array => Visualizer::Array(ArrayVisualizer::new(values)),
            VisualizerKind::Stack => Visualizer::Stack(StackVisualizer::new(values)),
            VisualizerKind::Queue => Visualizer::Queue(QueueVisualizer::new(values)),
            VisualizerKind::LinkedList => {
                Visualizer::LinkedList(LinkedListVisualizer::new(values))
            }
        }
    }

    pub fn kind(&self) -> VisualizerKind {
        match self {
            Visualizer::Tree(_) => VisualizerKind::Tree,
            Visualizer::Array(_) => VisualizerKind::Array,
            Visualizer::Stack(_) => VisualizerKind::Stack,
            Visualizer::Queue(_) => VisualizerKind::Queue,
            Visualizer::LinkedList(_) => VisualizerKind::LinkedList,
        }
    }

    /// Advance animations, applying any deferred removal that came due
    pub fn tick(&mut self, now: Instant) {
        match self {
            Visualizer::Tree(v) => v.tick(now),
            Visualizer::Array(v) => v.tick(now),
            Visualizer::Stack(v) => v.tick(now),
            Visualizer::Queue(v) => v.tick(now),
            Visualizer::LinkedList(v) => v.tick(now),
        }
    }

    /// Operation status visible at `now`
    pub fn message(&self, now: Instant) -> Option<&str> {
        match self {
            Visualizer::Tree(v) => v.animator().message(now),
            Visualizer::Array(v) => v.animator().message(now),
            Visualizer::Stack(v) => v.animator().message(now),
            Visualizer::Queue(v) => v.animator().message(now),
            Visualizer::LinkedList(v) => v.animator().message(now),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        match self {
            Visualizer::Tree(v) => v.reset(now),
            Visualizer::Array(v) => v.reset(now),
            Visualizer::Stack(v) => v.reset(now),
            Visualizer::Queue(v) => v.reset(now),
            Visualizer::LinkedList(v) => v.reset(now),
        }
    }
}
