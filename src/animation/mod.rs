//! Clock-driven animation cues for the visualizers
//!
//! Every visualizer owns one [`Animator`]. A user command builds a [`Cue`]
//! (status message, highlighted mark, optional stepped playback, optional
//! deferred commit) and starts it. The UI loop calls [`Animator::tick`] with
//! the current [`Instant`]; when the cue runs out the animator goes back to
//! idle and hands back the deferred commit, if any.
//!
//! # Timeline of a cue
//!
//! ```text
//! 0 ──── interval ──── 2·interval ── … ── (n+1)·interval ──── + hold ──▶ idle
//!  message + mark    step[0]   step[1]       finale message
//! ```
//!
//! A cue without steps shows its message and mark for `hold`, then ends.
//!
//! Starting a new cue cancels the running one. Its deferred commit is returned
//! from [`Animator::start`] so the caller can apply it right away instead of
//! losing the operation.

use std::time::{Duration, Instant};
use tracing::debug;

/// How long a plain status message stays up
pub const MESSAGE_HOLD: Duration = Duration::from_millis(2000);
/// How long a push/enqueue highlight stays up
pub const HIGHLIGHT_HOLD: Duration = Duration::from_millis(1500);
/// Delay between highlighting an element and removing it
pub const COMMIT_DELAY: Duration = Duration::from_millis(1000);
/// Step length of traversal playback
pub const TRAVERSAL_STEP: Duration = Duration::from_millis(600);
/// Step length of linked-list search playback
pub const SEARCH_STEP: Duration = Duration::from_millis(500);

/// What a visualizer highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// A cell or node by position
    Index(usize),
    /// A tree node by value
    Value(i64),
    /// Top of a stack
    Top,
    /// Front of a queue
    Front,
    /// Rear of a queue
    Rear,
}

/// Whether an animator is showing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// One animation sequence
#[derive(Debug, Clone)]
pub struct Cue<P> {
    message: String,
    mark: Option<Mark>,
    steps: Vec<Mark>,
    interval: Option<Duration>,
    finale: Option<String>,
    keep_last_step: bool,
    hold: Duration,
    commit: Option<P>,
}

impl<P> Cue<P> {
    /// A status message held for [`MESSAGE_HOLD`]
    pub fn message(text: impl Into<String>) -> Self {
        Cue {
            message: text.into(),
            mark: None,
            steps: Vec::new(),
            interval: None,
            finale: None,
            keep_last_step: false,
            hold: MESSAGE_HOLD,
            commit: None,
        }
    }

    /// Highlight `mark` for the whole cue
    pub fn mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Highlight `steps` one at a time, one per `interval`
    pub fn steps(mut self, steps: Vec<Mark>, interval: Duration) -> Self {
        self.steps = steps;
        self.interval = Some(interval);
        self
    }

    /// Message shown once the steps are done
    pub fn finale(mut self, text: impl Into<String>) -> Self {
        self.finale = Some(text.into());
        self
    }

    /// Leave the last step highlighted during the hold
    pub fn keep_last_step(mut self) -> Self {
        self.keep_last_step = true;
        self
    }

    /// Operation applied when the cue ends (or is cancelled)
    pub fn commit(mut self, commit: P) -> Self {
        self.commit = Some(commit);
        self
    }

    /// Time until the last step has played
    fn steps_end(&self) -> Duration {
        match self.interval {
            Some(interval) => interval * (self.steps.len() as u32 + 1),
            None => Duration::ZERO,
        }
    }

    fn total(&self) -> Duration {
        self.steps_end() + self.hold
    }

    /// Number of steps shown after `elapsed`
    fn steps_shown(&self, elapsed: Duration) -> usize {
        match self.interval {
            Some(interval) if !interval.is_zero() => {
                let ticks = elapsed.as_millis() / interval.as_millis().max(1);
                (ticks as usize).min(self.steps.len())
            }
            _ => 0,
        }
    }
}

struct Active<P> {
    cue: Cue<P>,
    started: Instant,
}

/// Plays one cue at a time
pub struct Animator<P> {
    active: Option<Active<P>>,
}

impl<P> Animator<P> {
    pub fn new() -> Self {
        Animator { active: None }
    }

    /// Start `cue`, cancelling whatever is running.
    ///
    /// Returns the cancelled cue's deferred commit so it can be applied now.
    pub fn start(&mut self, cue: Cue<P>, now: Instant) -> Option<P> {
        let cancelled = self.flush();
        debug!(message = %cue.message, steps = cue.steps.len(), "animation started");
        self.active = Some(Active { cue, started: now });
        cancelled
    }

    /// Drop the running cue, returning its deferred commit
    pub fn flush(&mut self) -> Option<P> {
        let active = self.active.take()?;
        debug!(message = %active.cue.message, "animation cancelled");
        active.cue.commit
    }

    /// Advance to `now`. Returns the deferred commit when the cue ends.
    pub fn tick(&mut self, now: Instant) -> Option<P> {
        let expired = self
            .active
            .as_ref()
            .is_some_and(|a| now.saturating_duration_since(a.started) >= a.cue.total());
        if !expired {
            return None;
        }
        let active = self.active.take()?;
        debug!(message = %active.cue.message, "animation finished");
        active.cue.commit
    }

    pub fn phase(&self) -> Phase {
        if self.active.is_some() {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }

    /// The running cue and how far into it we are, if it has not run out
    fn live(&self, now: Instant) -> Option<(&Cue<P>, Duration)> {
        let active = self.active.as_ref()?;
        let elapsed = now.saturating_duration_since(active.started);
        (elapsed < active.cue.total()).then_some((&active.cue, elapsed))
    }

    /// Status message visible at `now`
    pub fn message(&self, now: Instant) -> Option<&str> {
        let (cue, elapsed) = self.live(now)?;
        if elapsed >= cue.steps_end() {
            if let Some(finale) = &cue.finale {
                return Some(finale.as_str());
            }
        }
        Some(cue.message.as_str())
    }

    /// Highlight visible at `now`
    pub fn mark(&self, now: Instant) -> Option<Mark> {
        let (cue, elapsed) = self.live(now)?;
        if cue.interval.is_none() {
            return cue.mark;
        }
        if elapsed >= cue.steps_end() {
            return if cue.keep_last_step {
                cue.steps.last().copied().or(cue.mark)
            } else {
                cue.mark
            };
        }
        match cue.steps_shown(elapsed) {
            0 => cue.mark,
            n => Some(cue.steps[n - 1]),
        }
    }

    /// Steps already played at `now`
    pub fn visited(&self, now: Instant) -> &[Mark] {
        match self.live(now) {
            Some((cue, elapsed)) => &cue.steps[..cue.steps_shown(elapsed)],
            None => &[],
        }
    }
}

impl<P> Default for Animator<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_message_clears_after_hold() {
        let t0 = Instant::now();
        let mut animator: Animator<()> = Animator::new();
        animator.start(Cue::message("Tree reset!"), t0);

        assert_eq!(animator.message(t0 + ms(1999)), Some("Tree reset!"));
        assert_eq!(animator.tick(t0 + ms(1999)), None);
        assert_eq!(animator.phase(), Phase::Animating);

        assert_eq!(animator.message(t0 + ms(2000)), None);
        animator.tick(t0 + ms(2000));
        assert!(animator.is_idle());
    }

    #[test]
    fn test_steps_play_one_per_interval() {
        let t0 = Instant::now();
        let mut animator: Animator<()> = Animator::new();
        let steps = vec![Mark::Value(20), Mark::Value(30), Mark::Value(40)];
        animator.start(
            Cue::message("Inorder").steps(steps, ms(600)).keep_last_step(),
            t0,
        );

        assert_eq!(animator.mark(t0), None);
        assert_eq!(animator.mark(t0 + ms(600)), Some(Mark::Value(20)));
        assert_eq!(animator.mark(t0 + ms(1250)), Some(Mark::Value(30)));
        assert_eq!(animator.visited(t0 + ms(1250)).len(), 2);
        assert_eq!(animator.mark(t0 + ms(1800)), Some(Mark::Value(40)));
        // steps end at 4 * 600, the last one stays for the hold
        assert_eq!(animator.mark(t0 + ms(3000)), Some(Mark::Value(40)));
        assert_eq!(animator.mark(t0 + ms(4400)), None);
    }

    #[test]
    fn test_finale_replaces_message_after_steps() {
        let t0 = Instant::now();
        let mut animator: Animator<()> = Animator::new();
        animator.start(
            Cue::message("Traversing list...")
                .steps(vec![Mark::Index(0)], ms(600))
                .finale("Traversal complete!"),
            t0,
        );
        assert_eq!(animator.message(t0 + ms(700)), Some("Traversing list..."));
        assert_eq!(animator.message(t0 + ms(1200)), Some("Traversal complete!"));
        assert_eq!(animator.mark(t0 + ms(1200)), None);
    }

    #[test]
    fn test_commit_is_returned_once_when_cue_ends() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.start(Cue::message("Popping").hold(COMMIT_DELAY).commit(7u8), t0);

        assert_eq!(animator.tick(t0 + ms(500)), None);
        assert_eq!(animator.tick(t0 + ms(1000)), Some(7));
        assert_eq!(animator.tick(t0 + ms(1500)), None);
    }

    #[test]
    fn test_new_cue_cancels_running_one_and_returns_its_commit() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.start(Cue::message("Popping").hold(COMMIT_DELAY).commit(1u8), t0);

        let cancelled = animator.start(Cue::message("Pushing"), t0 + ms(100));
        assert_eq!(cancelled, Some(1));
        assert_eq!(animator.message(t0 + ms(200)), Some("Pushing"));
        assert_eq!(animator.tick(t0 + ms(5000)), None);
    }
}
