//! Stack widget (LIFO)

use crate::animation::{Animator, Cue, Mark, COMMIT_DELAY, HIGHLIGHT_HOLD};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCommit {
    Pop,
}

pub struct StackVisualizer {
    /// Bottom first; the top is the last element
    items: Vec<i64>,
    initial: Vec<i64>,
    animator: Animator<StackCommit>,
}

impl StackVisualizer {
    pub fn new(initial: Vec<i64>) -> Self {
        StackVisualizer {
            items: initial.clone(),
            initial,
            animator: Animator::new(),
        }
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn animator(&self) -> &Animator<StackCommit> {
        &self.animator
    }

    /// Whether the top element is highlighted at `now`
    pub fn top_highlighted(&self, now: Instant) -> bool {
        self.animator.mark(now) == Some(Mark::Top)
    }

    pub fn push(&mut self, value: i64, now: Instant) {
        self.play(
            Cue::message(format!("Pushing {} onto stack...", value))
                .mark(Mark::Top)
                .hold(HIGHLIGHT_HOLD),
            now,
        );
        self.items.push(value);
    }

    pub fn pop(&mut self, now: Instant) {
        self.flush();
        let Some(&top) = self.items.last() else {
            self.play(Cue::message("Stack is empty! Cannot pop."), now);
            return;
        };
        self.play(
            Cue::message(format!("Popping {} from stack...", top))
                .mark(Mark::Top)
                .hold(COMMIT_DELAY)
                .commit(StackCommit::Pop),
            now,
        );
    }

    pub fn peek(&mut self, now: Instant) {
        self.flush();
        let Some(&top) = self.items.last() else {
            self.play(Cue::message("Stack is empty! Nothing to peek."), now);
            return;
        };
        self.play(
            Cue::message(format!("Top of stack: {}", top)).mark(Mark::Top),
            now,
        );
    }

    pub fn report_empty(&mut self, now: Instant) {
        self.flush();
        let message = if self.items.is_empty() {
            "✅ Stack is EMPTY (true)".to_string()
        } else {
            format!(
                "❌ Stack is NOT empty (false) - Contains {} elements",
                self.items.len()
            )
        };
        self.play(Cue::message(message), now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.play(Cue::message("Stack reset!"), now);
        self.items = self.initial.clone();
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(commit) = self.animator.tick(now) {
            self.apply(commit);
        }
    }

    fn play(&mut self, cue: Cue<StackCommit>, now: Instant) {
        if let Some(commit) = self.animator.start(cue, now) {
            self.apply(commit);
        }
    }

    fn flush(&mut self) {
        if let Some(commit) = self.animator.flush() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: StackCommit) {
        match commit {
            StackCommit::Pop => {
                self.items.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_lifo() {
        let t0 = Instant::now();
        let mut stack = StackVisualizer::new(vec![10, 20, 30]);
        stack.pop(t0);
        assert_eq!(stack.animator().message(t0), Some("Popping 30 from stack..."));
        stack.tick(t0 + COMMIT_DELAY);
        assert_eq!(stack.items(), &[10, 20]);
    }

    #[test]
    fn test_rapid_pops_both_apply() {
        let t0 = Instant::now();
        let mut stack = StackVisualizer::new(vec![10, 20, 30]);
        stack.pop(t0);
        stack.pop(t0);
        assert_eq!(stack.items(), &[10, 20]);
        assert_eq!(stack.animator().message(t0), Some("Popping 20 from stack..."));
        stack.tick(t0 + COMMIT_DELAY);
        assert_eq!(stack.items(), &[10]);
    }

    #[test]
    fn test_empty_stack_messages() {
        let t0 = Instant::now();
        let mut stack = StackVisualizer::new(Vec::new());
        stack.pop(t0);
        assert_eq!(stack.animator().message(t0), Some("Stack is empty! Cannot pop."));
        stack.report_empty(t0);
        assert_eq!(stack.animator().message(t0), Some("✅ Stack is EMPTY (true)"));
    }
}
