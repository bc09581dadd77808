//! Queue widget (FIFO)

use crate::animation::{Animator, Cue, Mark, COMMIT_DELAY, HIGHLIGHT_HOLD};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCommit {
    Dequeue,
}

pub struct QueueVisualizer {
    items: VecDeque<i64>,
    initial: Vec<i64>,
    animator: Animator<QueueCommit>,
}

impl QueueVisualizer {
    pub fn new(initial: Vec<i64>) -> Self {
        QueueVisualizer {
            items: initial.iter().copied().collect(),
            initial,
            animator: Animator::new(),
        }
    }

    pub fn items(&self) -> &VecDeque<i64> {
        &self.items
    }

    pub fn animator(&self) -> &Animator<QueueCommit> {
        &self.animator
    }

    pub fn mark(&self, now: Instant) -> Option<Mark> {
        self.animator.mark(now)
    }

    pub fn enqueue(&mut self, value: i64, now: Instant) {
        self.play(
            Cue::message(format!("Enqueuing {} to rear...", value))
                .mark(Mark::Rear)
                .hold(HIGHLIGHT_HOLD),
            now,
        );
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self, now: Instant) {
        self.flush();
        let Some(&front) = self.items.front() else {
            self.play(Cue::message("Queue is empty! Cannot dequeue."), now);
            return;
        };
        self.play(
            Cue::message(format!("Dequeuing {} from front...", front))
                .mark(Mark::Front)
                .hold(COMMIT_DELAY)
                .commit(QueueCommit::Dequeue),
            now,
        );
    }

    pub fn front(&mut self, now: Instant) {
        self.flush();
        let Some(&front) = self.items.front() else {
            self.play(Cue::message("Queue is empty! No front element."), now);
            return;
        };
        self.play(
            Cue::message(format!("Front of queue: {}", front)).mark(Mark::Front),
            now,
        );
    }

    pub fn rear(&mut self, now: Instant) {
        self.flush();
        let Some(&rear) = self.items.back() else {
            self.play(Cue::message("Queue is empty! No rear element."), now);
            return;
        };
        self.play(
            Cue::message(format!("Rear of queue: {}", rear)).mark(Mark::Rear),
            now,
        );
    }

    pub fn report_empty(&mut self, now: Instant) {
        self.flush();
        let message = if self.items.is_empty() {
            "✅ Queue is EMPTY (true)".to_string()
        } else {
            format!(
                "❌ Queue is NOT empty (false) - Contains {} elements",
                self.items.len()
            )
        };
        self.play(Cue::message(message), now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.play(Cue::message("Queue reset!"), now);
        self.items = self.initial.iter().copied().collect();
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(commit) = self.animator.tick(now) {
            self.apply(commit);
        }
    }

    fn play(&mut self, cue: Cue<QueueCommit>, now: Instant) {
        if let Some(commit) = self.animator.start(cue, now) {
            self.apply(commit);
        }
    }

    fn flush(&mut self) {
        if let Some(commit) = self.animator.flush() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: QueueCommit) {
        match commit {
            QueueCommit::Dequeue => {
                self.items.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_is_fifo() {
        let t0 = Instant::now();
        let mut queue = QueueVisualizer::new(vec![10, 20, 30]);
        queue.enqueue(40, t0);
        queue.dequeue(t0);
        assert_eq!(queue.mark(t0), Some(Mark::Front));
        queue.tick(t0 + COMMIT_DELAY);
        assert_eq!(queue.items().iter().copied().collect::<Vec<_>>(), vec![20, 30, 40]);
    }

    #[test]
    fn test_peeks_on_empty_queue() {
        let t0 = Instant::now();
        let mut queue = QueueVisualizer::new(Vec::new());
        queue.rear(t0);
        assert_eq!(queue.animator().message(t0), Some("Queue is empty! No rear element."));
        assert_eq!(queue.mark(t0), None);
    }
}
