//! Grading presentation for a submitted quiz

use crate::api::types::{Difficulty, QuizResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Outstanding,
    Excellent,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => ScoreBand::Outstanding,
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 70.0 => ScoreBand::GreatJob,
            s if s >= 60.0 => ScoreBand::GoodEffort,
            _ => ScoreBand::KeepPracticing,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            ScoreBand::Outstanding => "Outstanding!",
            ScoreBand::Excellent => "Excellent!",
            ScoreBand::GreatJob => "Great Job!",
            ScoreBand::GoodEffort => "Good Effort!",
            ScoreBand::KeepPracticing => "Keep Practicing!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ScoreBand::Outstanding => "🏆",
            ScoreBand::Excellent => "🌟",
            ScoreBand::GreatJob => "👏",
            ScoreBand::GoodEffort => "💪",
            ScoreBand::KeepPracticing => "📚",
        }
    }
}

/// One row of the difficulty breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyRow {
    pub difficulty: Difficulty,
    pub correct: u32,
    pub total: u32,
}

impl DifficultyRow {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total) * 100.0
        }
    }
}

/// Easy/medium/hard rows, skipping difficulties the quiz had no questions for
pub fn breakdown(results: &QuizResults) -> Vec<DifficultyRow> {
    Difficulty::GRADED
        .iter()
        .filter_map(|&difficulty| {
            let (correct, total) = results.tally(difficulty);
            (total > 0).then_some(DifficultyRow {
                difficulty,
                correct,
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(ScoreBand::for_score(100.0), ScoreBand::Outstanding);
        assert_eq!(ScoreBand::for_score(90.0), ScoreBand::Outstanding);
        assert_eq!(ScoreBand::for_score(89.9), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(70.0), ScoreBand::GreatJob);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::GoodEffort);
        assert_eq!(ScoreBand::for_score(59.0), ScoreBand::KeepPracticing);
        assert_eq!(ScoreBand::for_score(0.0).headline(), "Keep Practicing!");
    }

    #[test]
    fn test_breakdown_skips_empty_difficulties() {
        let results = QuizResults {
            quiz_id: "q".into(),
            topic: "queues".into(),
            total_questions: 5,
            correct_answers: 3,
            score: 60.0,
            time_taken: 90,
            passed: true,
            questions: Vec::new(),
            easy_correct: 2,
            easy_total: 3,
            medium_correct: 1,
            medium_total: 2,
            hard_correct: 0,
            hard_total: 0,
            feedback: String::new(),
        };
        let rows = breakdown(&results);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].difficulty, Difficulty::Medium);
        assert_eq!(rows[1].percent(), 50.0);
    }
}
