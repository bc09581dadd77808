//! Singly linked list widget
//!
//! Nodes are kept in order in a `Vec`; each carries a stable id so the
//! renderer can tell two nodes with the same value apart.

use crate::animation::{Animator, Cue, Mark, COMMIT_DELAY, SEARCH_STEP, TRAVERSAL_STEP};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode {
    pub id: u64,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommit {
    /// Remove every node holding the value
    DeleteValue(i64),
}

pub struct LinkedListVisualizer {
    nodes: Vec<ListNode>,
    initial: Vec<i64>,
    next_id: u64,
    animator: Animator<ListCommit>,
}

impl LinkedListVisualizer {
    pub fn new(initial: Vec<i64>) -> Self {
        let mut list = LinkedListVisualizer {
            nodes: Vec::new(),
            initial,
            next_id: 0,
            animator: Animator::new(),
        };
        list.rebuild();
        list
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn animator(&self) -> &Animator<ListCommit> {
        &self.animator
    }

    pub fn highlighted(&self, now: Instant) -> Option<usize> {
        match self.animator.mark(now) {
            Some(Mark::Index(index)) => Some(index),
            _ => None,
        }
    }

    pub fn insert_head(&mut self, value: i64, now: Instant) {
        self.play(
            Cue::message(format!("Inserting {} at head...", value)).mark(Mark::Index(0)),
            now,
        );
        let node = self.node(value);
        self.nodes.insert(0, node);
    }

    pub fn insert_tail(&mut self, value: i64, now: Instant) {
        self.flush();
        let index = self.nodes.len();
        self.play(
            Cue::message(format!("Inserting {} at tail...", value)).mark(Mark::Index(index)),
            now,
        );
        let node = self.node(value);
        self.nodes.push(node);
    }

    pub fn delete(&mut self, value: i64, now: Instant) {
        self.flush();
        let Some(index) = self.position(value) else {
            self.play(Cue::message(format!("Value {} not found!", value)), now);
            return;
        };
        self.play(
            Cue::message(format!("Deleting node with value {}...", value))
                .mark(Mark::Index(index))
                .hold(COMMIT_DELAY)
                .commit(ListCommit::DeleteValue(value)),
            now,
        );
    }

    /// Walk from the head until `value` turns up
    pub fn search(&mut self, value: i64, now: Instant) {
        self.flush();
        let found = self.position(value);
        let visited = found.map_or(self.nodes.len(), |index| index + 1);
        let steps = (0..visited).map(Mark::Index).collect();

        let mut cue = Cue::message(format!("Searching for {}...", value)).steps(steps, SEARCH_STEP);
        cue = match found {
            Some(index) => cue
                .finale(format!("Found {} at position {}!", value, index))
                .keep_last_step(),
            None => cue.finale(format!("Value {} not found in list", value)),
        };
        self.play(cue, now);
    }

    pub fn traverse(&mut self, now: Instant) {
        self.flush();
        if self.nodes.is_empty() {
            self.play(Cue::message("List is empty!"), now);
            return;
        }
        let steps = (0..self.nodes.len()).map(Mark::Index).collect();
        self.play(
            Cue::message("Traversing list...")
                .steps(steps, TRAVERSAL_STEP)
                .finale("Traversal complete!"),
            now,
        );
    }

    pub fn reset(&mut self, now: Instant) {
        self.play(Cue::message("List reset!"), now);
        self.rebuild();
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(commit) = self.animator.tick(now) {
            self.apply(commit);
        }
    }

    fn position(&self, value: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }

    fn node(&mut self, value: i64) -> ListNode {
        let id = self.next_id;
        self.next_id += 1;
        ListNode { id, value }
    }

    fn rebuild(&mut self) {
        let initial = self.initial.clone();
        let nodes: Vec<ListNode> = initial.into_iter().map(|v| self.node(v)).collect();
        self.nodes = nodes;
    }

    fn play(&mut self, cue: Cue<ListCommit>, now: Instant) {
        if let Some(commit) = self.animator.start(cue, now) {
            self.apply(commit);
        }
    }

    fn flush(&mut self) {
        if let Some(commit) = self.animator.flush() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: ListCommit) {
        match commit {
            ListCommit::DeleteValue(value) => self.nodes.retain(|n| n.value != value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_head_and_tail_inserts() {
        let t0 = Instant::now();
        let mut list = LinkedListVisualizer::new(vec![10, 20]);
        list.insert_head(5, t0);
        assert_eq!(list.highlighted(t0), Some(0));
        list.insert_tail(30, t0);
        assert_eq!(list.highlighted(t0), Some(3));
        assert_eq!(list.values(), vec![5, 10, 20, 30]);
    }

    #[test]
    fn test_ids_stay_unique_across_reset() {
        let t0 = Instant::now();
        let mut list = LinkedListVisualizer::new(vec![10, 10]);
        let before: Vec<u64> = list.nodes().iter().map(|n| n.id).collect();
        list.reset(t0);
        let after: Vec<u64> = list.nodes().iter().map(|n| n.id).collect();
        assert_ne!(before[0], before[1]);
        assert!(after.iter().all(|id| !before.contains(id)));
    }

    #[test]
    fn test_delete_removes_all_matches_after_delay() {
        let t0 = Instant::now();
        let mut list = LinkedListVisualizer::new(vec![10, 20, 10]);
        list.delete(10, t0);
        assert_eq!(list.highlighted(t0), Some(0));
        list.tick(t0 + COMMIT_DELAY);
        assert_eq!(list.values(), vec![20]);
    }

    #[test]
    fn test_search_walks_to_match() {
        let t0 = Instant::now();
        let mut list = LinkedListVisualizer::new(vec![10, 20, 30]);
        list.search(20, t0);

        assert_eq!(list.highlighted(t0 + Duration::from_millis(500)), Some(0));
        assert_eq!(list.highlighted(t0 + Duration::from_millis(1000)), Some(1));
        assert_eq!(
            list.animator().message(t0 + Duration::from_millis(1500)),
            Some("Found 20 at position 1!")
        );
        assert_eq!(list.highlighted(t0 + Duration::from_millis(1500)), Some(1));
    }

    #[test]
    fn test_search_miss_reports_not_found() {
        let t0 = Instant::now();
        let mut list = LinkedListVisualizer::new(vec![10]);
        list.search(99, t0);
        let done = t0 + Duration::from_millis(1000);
        assert_eq!(list.animator().message(done), Some("Value 99 not found in list"));
        assert_eq!(list.highlighted(done), None);
    }
}
