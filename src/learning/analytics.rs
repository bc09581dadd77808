//! Progress statistics over completed quizzes
//!
//! Everything here takes quizzes in chronological order (oldest first). The
//! history endpoint returns newest first; [`Analytics::from_history`] flips it.

use super::round_half_up;
use crate::api::types::{Difficulty, QuizHistory, QuizSummary};
use rustc_hash::{FxHashMap, FxHashSet};

/// Quizzes needed before an improvement rate is reported
pub const IMPROVEMENT_MIN_QUIZZES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total_quizzes: usize,
    pub average_score: i64,
    pub total_topics: usize,
    pub best_score: i64,
    /// Percent change of the last three scores over the first three
    pub improvement_rate: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePoint {
    pub label: String,
    pub score: i64,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicScore {
    pub topic: String,
    pub average: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyScore {
    pub difficulty: Difficulty,
    pub score: i64,
}

pub fn stats(quizzes: &[QuizSummary]) -> Stats {
    if quizzes.is_empty() {
        return Stats::default();
    }
    let total = quizzes.len();
    let average = mean(quizzes.iter().map(|q| q.score));
    let topics: FxHashSet<&str> = quizzes.iter().map(|q| q.topic.as_str()).collect();
    let best = quizzes.iter().map(|q| q.score).fold(f64::MIN, f64::max);

    let improvement = if total >= IMPROVEMENT_MIN_QUIZZES {
        let first = mean(quizzes[..3].iter().map(|q| q.score));
        let last = mean(quizzes[total - 3..].iter().map(|q| q.score));
        if first == 0.0 {
            0.0
        } else {
            (last - first) / first * 100.0
        }
    } else {
        0.0
    };

    Stats {
        total_quizzes: total,
        average_score: round_half_up(average),
        total_topics: topics.len(),
        best_score: round_half_up(best),
        improvement_rate: round_half_up(improvement),
    }
}

pub fn score_over_time(quizzes: &[QuizSummary]) -> Vec<ScorePoint> {
    quizzes
        .iter()
        .enumerate()
        .map(|(i, q)| ScorePoint {
            label: format!("Quiz {}", i + 1),
            score: round_half_up(q.score),
            topic: q.topic.clone(),
        })
        .collect()
}

/// Average score per topic, topics in the order they were first quizzed on
pub fn topic_performance(quizzes: &[QuizSummary]) -> Vec<TopicScore> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: FxHashMap<&str, (f64, u32)> = FxHashMap::default();
    for quiz in quizzes {
        let entry = sums.entry(quiz.topic.as_str()).or_insert_with(|| {
            order.push(quiz.topic.as_str());
            (0.0, 0)
        });
        entry.0 += quiz.score;
        entry.1 += 1;
    }
    order
        .into_iter()
        .map(|topic| {
            let (sum, count) = sums[topic];
            TopicScore {
                topic: topic.to_string(),
                average: round_half_up(sum / f64::from(count)),
            }
        })
        .collect()
}

/// Mean per-quiz accuracy for each graded difficulty. A quiz without
/// questions of a difficulty contributes 0% to it.
pub fn difficulty_performance(quizzes: &[QuizSummary]) -> Vec<DifficultyScore> {
    if quizzes.is_empty() {
        return Vec::new();
    }
    Difficulty::GRADED
        .iter()
        .map(|&difficulty| {
            let sum: f64 = quizzes
                .iter()
                .map(|quiz| {
                    let asked = quiz
                        .questions
                        .iter()
                        .filter(|q| q.difficulty == difficulty);
                    let (correct, total) = asked.fold((0u32, 0u32), |(c, t), q| {
                        (c + u32::from(q.is_correct == Some(true)), t + 1)
                    });
                    f64::from(correct) / f64::from(total.max(1)) * 100.0
                })
                .sum();
            DifficultyScore {
                difficulty,
                score: round_half_up(sum / quizzes.len() as f64),
            }
        })
        .collect()
}

/// One-line recommendations shown under the charts
pub fn insights(stats: &Stats) -> Vec<&'static str> {
    let mut out = Vec::new();
    if stats.average_score >= 80 {
        out.push("Excellent performance! You're mastering the topics well.");
    }
    if stats.average_score < 60 {
        out.push("Consider reviewing the explanations before taking quizzes.");
    }
    if stats.improvement_rate > 10 {
        out.push("Great progress! Your scores are improving consistently.");
    }
    if stats.total_quizzes < 5 {
        out.push("Take more quizzes to get better insights into your learning patterns.");
    }
    out
}

fn mean(scores: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = scores.fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Everything the analytics screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    /// Oldest first
    pub quizzes: Vec<QuizSummary>,
    pub stats: Stats,
    pub timeline: Vec<ScorePoint>,
    pub topics: Vec<TopicScore>,
    pub difficulties: Vec<DifficultyScore>,
}

impl Analytics {
    pub fn from_history(history: QuizHistory) -> Self {
        let mut quizzes = history.quizzes;
        quizzes.reverse();
        Analytics {
            stats: stats(&quizzes),
            timeline: score_over_time(&quizzes),
            topics: topic_performance(&quizzes),
            difficulties: difficulty_performance(&quizzes),
            quizzes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::HistoryQuestion;

    fn quiz(topic: &str, score: f64) -> QuizSummary {
        QuizSummary {
            id: format!("{}-{}", topic, score),
            topic: topic.to_string(),
            score,
            correct_answers: 0,
            total_questions: 0,
            time_taken: None,
            completed_at: None,
            questions: Vec::new(),
        }
    }

    fn asked(difficulty: Difficulty, correct: bool) -> HistoryQuestion {
        HistoryQuestion {
            question_text: "?".into(),
            user_answer: Some("A".into()),
            correct_answer: if correct { "A".into() } else { "B".into() },
            is_correct: Some(correct),
            difficulty,
            explanation: None,
            options: Default::default(),
        }
    }

    #[test]
    fn test_stats_basic() {
        let quizzes = vec![quiz("stacks", 60.0), quiz("queues", 80.0), quiz("stacks", 90.5)];
        let s = stats(&quizzes);
        assert_eq!(s.total_quizzes, 3);
        assert_eq!(s.average_score, 77);
        assert_eq!(s.total_topics, 2);
        assert_eq!(s.best_score, 91);
        assert_eq!(s.improvement_rate, 0);
    }

    #[test]
    fn test_improvement_needs_six_quizzes() {
        let scores = [40.0, 50.0, 60.0, 70.0, 80.0, 90.0];
        let quizzes: Vec<_> = scores.iter().map(|&s| quiz("trees", s)).collect();
        // first three average 50, last three 80
        assert_eq!(stats(&quizzes).improvement_rate, 60);
        assert_eq!(stats(&quizzes[..5]).improvement_rate, 0);
    }

    #[test]
    fn test_improvement_with_zero_baseline() {
        let scores = [0.0, 0.0, 0.0, 50.0, 60.0, 70.0];
        let quizzes: Vec<_> = scores.iter().map(|&s| quiz("trees", s)).collect();
        assert_eq!(stats(&quizzes).improvement_rate, 0);
    }

    #[test]
    fn test_topics_in_first_seen_order() {
        let quizzes = vec![
            quiz("queues", 50.0),
            quiz("arrays", 100.0),
            quiz("queues", 70.0),
        ];
        let topics = topic_performance(&quizzes);
        assert_eq!(topics[0].topic, "queues");
        assert_eq!(topics[0].average, 60);
        assert_eq!(topics[1].topic, "arrays");
    }

    #[test]
    fn test_missing_difficulty_counts_as_zero() {
        let mut first = quiz("arrays", 100.0);
        first.questions = vec![asked(Difficulty::Easy, true), asked(Difficulty::Hard, true)];
        let mut second = quiz("arrays", 50.0);
        second.questions = vec![asked(Difficulty::Easy, true), asked(Difficulty::Easy, false)];

        let scores = difficulty_performance(&[first, second]);
        assert_eq!(scores[0].score, 75); // (100 + 50) / 2
        assert_eq!(scores[1].score, 0);
        assert_eq!(scores[2].score, 50); // (100 + 0) / 2
    }

    #[test]
    fn test_from_history_reverses_order() {
        let history = QuizHistory {
            quizzes: vec![quiz("newest", 90.0), quiz("oldest", 10.0)],
        };
        let analytics = Analytics::from_history(history);
        assert_eq!(analytics.timeline[0].topic, "oldest");
        assert_eq!(analytics.timeline[0].label, "Quiz 1");
    }

    #[test]
    fn test_no_history() {
        let analytics = Analytics::from_history(QuizHistory::default());
        assert!(analytics.is_empty());
        assert!(analytics.difficulties.is_empty());
        assert_eq!(analytics.stats, Stats::default());
    }
}
