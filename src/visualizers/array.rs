//! Array widget

use crate::animation::{Animator, Cue, Mark, COMMIT_DELAY};
use std::time::Instant;

/// Base of the simulated addresses shown under each cell
pub const BASE_ADDRESS: usize = 0x1000;
/// Simulated element size in bytes
pub const ELEMENT_SIZE: usize = 4;

/// Mutations applied once their highlight has played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayCommit {
    Pop,
    InsertAt(usize, i64),
    DeleteAt(usize),
}

pub struct ArrayVisualizer {
    values: Vec<i64>,
    initial: Vec<i64>,
    animator: Animator<ArrayCommit>,
}

impl ArrayVisualizer {
    pub fn new(initial: Vec<i64>) -> Self {
        ArrayVisualizer {
            values: initial.clone(),
            initial,
            animator: Animator::new(),
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn animator(&self) -> &Animator<ArrayCommit> {
        &self.animator
    }

    /// Simulated address of cell `index`
    pub fn address(index: usize) -> usize {
        BASE_ADDRESS + index * ELEMENT_SIZE
    }

    pub fn highlighted(&self, now: Instant) -> Option<usize> {
        match self.animator.mark(now) {
            Some(Mark::Index(index)) => Some(index),
            _ => None,
        }
    }

    pub fn push(&mut self, value: i64, now: Instant) {
        self.play(Cue::message("Pushing value to end of array..."), now);
        self.values.push(value);
    }

    pub fn pop(&mut self, now: Instant) {
        // Earlier deferred removals land first so the highlight targets the real last cell
        self.flush();
        if self.values.is_empty() {
            self.play(Cue::message("Array is empty! Nothing to pop."), now);
            return;
        }
        let last = self.values.len() - 1;
        self.play(
            Cue::message("Removing last element...")
                .mark(Mark::Index(last))
                .hold(COMMIT_DELAY)
                .commit(ArrayCommit::Pop),
            now,
        );
    }

    pub fn insert_at(&mut self, index: i64, value: i64, now: Instant) {
        self.flush();
        let Some(index) = usize::try_from(index)
            .ok()
            .filter(|&i| i <= self.values.len())
        else {
            self.play(Cue::message("Invalid index!"), now);
            return;
        };
        self.play(
            Cue::message(format!("Inserting {} at index {}...", value, index))
                .mark(Mark::Index(index))
                .hold(COMMIT_DELAY)
                .commit(ArrayCommit::InsertAt(index, value)),
            now,
        );
    }

    pub fn delete_at(&mut self, index: i64, now: Instant) {
        self.flush();
        let Some(index) = self.checked_index(index) else {
            self.play(Cue::message("Invalid index!"), now);
            return;
        };
        self.play(
            Cue::message(format!("Deleting element at index {}...", index))
                .mark(Mark::Index(index))
                .hold(COMMIT_DELAY)
                .commit(ArrayCommit::DeleteAt(index)),
            now,
        );
    }

    pub fn access(&mut self, index: i64, now: Instant) {
        self.flush();
        let Some(index) = self.checked_index(index) else {
            self.play(Cue::message("Index out of bounds!"), now);
            return;
        };
        let value = self.values[index];
        self.play(
            Cue::message(format!(
                "Accessing array[{}] = {} in O(1) time!",
                index, value
            ))
            .mark(Mark::Index(index)),
            now,
        );
    }

    pub fn reset(&mut self, now: Instant) {
        self.play(Cue::message("Array reset!"), now);
        self.values = self.initial.clone();
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(commit) = self.animator.tick(now) {
            self.apply(commit);
        }
    }

    fn checked_index(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.values.len())
    }

    fn play(&mut self, cue: Cue<ArrayCommit>, now: Instant) {
        if let Some(commit) = self.animator.start(cue, now) {
            self.apply(commit);
        }
    }

    fn flush(&mut self) {
        if let Some(commit) = self.animator.flush() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: ArrayCommit) {
        match commit {
            ArrayCommit::Pop => {
                self.values.pop();
            }
            ArrayCommit::InsertAt(index, value) => {
                if index <= self.values.len() {
                    self.values.insert(index, value);
                }
            }
            ArrayCommit::DeleteAt(index) => {
                if index < self.values.len() {
                    self.values.remove(index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pop_waits_for_highlight() {
        let t0 = Instant::now();
        let mut array = ArrayVisualizer::new(vec![1, 2, 3]);
        array.pop(t0);

        assert_eq!(array.highlighted(t0), Some(2));
        array.tick(t0 + Duration::from_millis(500));
        assert_eq!(array.values(), &[1, 2, 3]);

        array.tick(t0 + COMMIT_DELAY);
        assert_eq!(array.values(), &[1, 2]);
        assert!(array.animator().is_idle());
    }

    #[test]
    fn test_insert_at_rejects_out_of_range() {
        let t0 = Instant::now();
        let mut array = ArrayVisualizer::new(vec![1, 2]);
        array.insert_at(3, 9, t0);
        array.insert_at(-1, 9, t0);
        array.tick(t0 + Duration::from_secs(5));
        assert_eq!(array.values(), &[1, 2]);
    }

    #[test]
    fn test_insert_at_end_is_allowed() {
        let t0 = Instant::now();
        let mut array = ArrayVisualizer::new(vec![1, 2]);
        array.insert_at(2, 9, t0);
        array.tick(t0 + COMMIT_DELAY);
        assert_eq!(array.values(), &[1, 2, 9]);
    }

    #[test]
    fn test_access_reports_value() {
        let t0 = Instant::now();
        let mut array = ArrayVisualizer::new(vec![10, 20, 30]);
        array.access(1, t0);
        assert_eq!(
            array.animator().message(t0),
            Some("Accessing array[1] = 20 in O(1) time!")
        );
        array.access(3, t0);
        assert_eq!(array.animator().message(t0), Some("Index out of bounds!"));
    }

    #[test]
    fn test_addresses_step_by_element_size() {
        assert_eq!(ArrayVisualizer::address(0), 0x1000);
        assert_eq!(ArrayVisualizer::address(3), 0x100c);
    }
}
