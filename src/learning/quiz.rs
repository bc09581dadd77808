//! Quiz player
//!
//! Holds a generated quiz while the student works through it. Answers are
//! recorded per question position and converted to per-question-id answers on
//! submission. The countdown is measured against the `Instant` the player was
//! created at; once it runs out the app submits whatever has been answered.

use crate::api::types::{QuizQuestion, QuizSession, QuizSubmission};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

pub struct QuizPlayer {
    session: QuizSession,
    current: usize,
    answers: FxHashMap<usize, String>,
    started: Instant,
    time_limit: Duration,
}

impl QuizPlayer {
    pub fn new(session: QuizSession, time_limit: Duration, now: Instant) -> Self {
        QuizPlayer {
            session,
            current: 0,
            answers: FxHashMap::default(),
            started: now,
            time_limit,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn len(&self) -> usize {
        self.session.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn question(&self) -> Option<&QuizQuestion> {
        self.session.questions.get(self.current)
    }

    /// Choose `letter` for the current question. Ignored if it is not one of
    /// the question's options.
    pub fn select(&mut self, letter: &str) -> bool {
        let letter = letter.to_ascii_uppercase();
        let valid = self
            .question()
            .is_some_and(|q| q.options.contains_key(&letter));
        if valid {
            self.answers.insert(self.current, letter);
        }
        valid
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len()
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Percentage of the way through, counting the current question
    pub fn progress(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.len() as f64 * 100.0
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn time_left(&self, now: Instant) -> Duration {
        self.time_limit.saturating_sub(self.elapsed(now))
    }

    pub fn timed_out(&self, now: Instant) -> bool {
        self.time_left(now).is_zero()
    }

    /// Answers keyed by question id, with whole seconds spent
    pub fn submission(&self, now: Instant) -> QuizSubmission {
        let answers = self
            .answers
            .iter()
            .filter_map(|(&index, letter)| {
                self.session
                    .questions
                    .get(index)
                    .map(|q| (q.id.clone(), letter.clone()))
            })
            .collect();
        QuizSubmission {
            quiz_session_id: self.session.id.clone(),
            answers,
            time_taken: self.elapsed(now).as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Difficulty;
    use std::collections::BTreeMap;

    fn question(n: u32) -> QuizQuestion {
        let options: BTreeMap<String, String> = ["A", "B", "C", "D"]
            .iter()
            .map(|l| (l.to_string(), format!("option {}", l)))
            .collect();
        QuizQuestion {
            id: format!("q{}", n),
            question_number: n,
            question_text: format!("Question {}?", n),
            options,
            difficulty: Difficulty::Easy,
        }
    }

    fn player(now: Instant) -> QuizPlayer {
        let session = QuizSession {
            id: "quiz-1".into(),
            topic: "stacks".into(),
            level: "beginner".into(),
            total_questions: 3,
            questions: vec![question(1), question(2), question(3)],
            started_at: None,
        };
        QuizPlayer::new(session, Duration::from_secs(300), now)
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut p = player(Instant::now());
        p.previous();
        assert_eq!(p.position(), 0);
        p.next();
        p.next();
        p.next();
        assert_eq!(p.position(), 2);
        assert!(p.is_last());
        assert_eq!(p.progress(), 100.0);
    }

    #[test]
    fn test_select_rejects_unknown_letters() {
        let mut p = player(Instant::now());
        assert!(p.select("b"));
        assert!(!p.select("E"));
        assert_eq!(p.answer(0), Some("B"));
    }

    #[test]
    fn test_submission_keys_answers_by_question_id() {
        let t0 = Instant::now();
        let mut p = player(t0);
        p.select("A");
        p.next();
        p.next();
        p.select("C");

        let submission = p.submission(t0 + Duration::from_millis(42_900));
        assert_eq!(submission.quiz_session_id, "quiz-1");
        assert_eq!(submission.time_taken, 42);
        assert_eq!(submission.answers.get("q1").map(String::as_str), Some("A"));
        assert_eq!(submission.answers.get("q3").map(String::as_str), Some("C"));
        assert!(!submission.answers.contains_key("q2"));
    }

    #[test]
    fn test_countdown() {
        let t0 = Instant::now();
        let p = player(t0);
        assert_eq!(p.time_left(t0 + Duration::from_secs(60)), Duration::from_secs(240));
        assert!(!p.timed_out(t0 + Duration::from_secs(299)));
        assert!(p.timed_out(t0 + Duration::from_secs(300)));
        assert!(p.timed_out(t0 + Duration::from_secs(400)));
    }
}
