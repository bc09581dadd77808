//! Request and response bodies of the tutor backend
//!
//! Field names match the backend's JSON exactly (snake_case).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Level::Beginner => "Just starting out",
            Level::Intermediate => "Building skills",
            Level::Advanced => "Deep knowledge",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LearningStyle {
    #[default]
    #[serde(rename = "visual")]
    Visual,
    #[serde(rename = "hands-on")]
    HandsOn,
    #[serde(rename = "conceptual")]
    Conceptual,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::HandsOn,
        LearningStyle::Conceptual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::HandsOn => "hands-on",
            LearningStyle::Conceptual => "conceptual",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Diagrams & charts",
            LearningStyle::HandsOn => "Code examples",
            LearningStyle::Conceptual => "Theory first",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question difficulty as tagged by the question generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Anything the generator invented outside the three known levels
    #[serde(other)]
    Other,
}

impl Difficulty {
    pub const GRADED: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other => "Other",
        }
    }
}

// ─── Profile ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreate {
    pub username: String,
    pub email: String,
    pub proficiency_level: Level,
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub preferred_topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<LearningStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_topics: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub proficiency_level: Level,
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub preferred_topics: Vec<String>,
    /// The backend stores this counter as a string
    pub total_sessions: String,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSession {
    pub id: String,
    pub topic: String,
    pub level: String,
    pub word_count: u32,
    pub estimated_reading_time: u32,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A user with their profile and recent activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullProfile {
    pub user: User,
    pub profile: Profile,
    #[serde(default)]
    pub recent_sessions: Vec<LearningSession>,
    #[serde(default)]
    pub total_topics_studied: u32,
}

// ─── Learning ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreetingRequest {
    pub student_name: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GreetingResponse {
    pub greeting: String,
    pub student_name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicRequest {
    pub topic: String,
    pub level: Level,
    pub learning_style: LearningStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicResponse {
    pub topic: String,
    pub level: String,
    pub explanation: String,
    pub word_count: u32,
    /// Minutes
    pub estimated_reading_time: u32,
    pub model_used: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeRequest {
    pub topic: String,
    pub level: Level,
    pub num_questions: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PracticeResponse {
    pub topic: String,
    pub level: String,
    pub questions: String,
    pub count: u32,
}

// ─── Quiz ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizGenerateRequest {
    pub username: String,
    pub topic: String,
    pub level: Level,
    pub num_questions: u8,
}

/// A question as served to the player (no answer key)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question_number: u32,
    pub question_text: String,
    /// Option letter to option text, e.g. `"A" -> "O(1)"`
    pub options: BTreeMap<String, String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub id: String,
    pub topic: String,
    pub level: String,
    pub total_questions: u32,
    pub questions: Vec<QuizQuestion>,
    pub started_at: Option<DateTime<Utc>>,
}

/// Quiz session as it arrives; the id may come under either name
#[derive(Debug, Deserialize)]
pub(crate) struct QuizSessionWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    quiz_session_id: Option<String>,
    topic: String,
    level: String,
    total_questions: u32,
    #[serde(default)]
    questions: Vec<QuizQuestion>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    started_at: Option<DateTime<Utc>>,
}

impl QuizSessionWire {
    /// `None` when the server sent neither id field
    pub(crate) fn into_session(self) -> Option<QuizSession> {
        let id = self.quiz_session_id.or(self.id)?;
        let mut questions = self.questions;
        questions.sort_by_key(|q| q.question_number);
        Some(QuizSession {
            id,
            topic: self.topic,
            level: self.level,
            total_questions: self.total_questions,
            questions,
            started_at: self.started_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSubmission {
    pub quiz_session_id: String,
    /// Question id to chosen option letter
    pub answers: BTreeMap<String, String>,
    /// Seconds
    pub time_taken: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionResult {
    pub question_number: u32,
    pub question_text: String,
    pub options: BTreeMap<String, String>,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizResults {
    pub quiz_id: String,
    pub topic: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Percentage, 0–100
    pub score: f64,
    pub time_taken: u64,
    pub passed: bool,
    pub questions: Vec<QuestionResult>,
    pub easy_correct: u32,
    pub easy_total: u32,
    pub medium_correct: u32,
    pub medium_total: u32,
    pub hard_correct: u32,
    pub hard_total: u32,
    #[serde(default)]
    pub feedback: String,
}

impl QuizResults {
    /// `(correct, total)` for one difficulty
    pub fn tally(&self, difficulty: Difficulty) -> (u32, u32) {
        match difficulty {
            Difficulty::Easy => (self.easy_correct, self.easy_total),
            Difficulty::Medium => (self.medium_correct, self.medium_total),
            Difficulty::Hard => (self.hard_correct, self.hard_total),
            Difficulty::Other => (0, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryQuestion {
    pub question_text: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub is_correct: Option<bool>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// One completed quiz
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub topic: String,
    pub score: f64,
    pub correct_answers: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub time_taken: Option<u64>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<HistoryQuestion>,
}

/// Completed quizzes, newest first
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct QuizHistory {
    #[serde(default)]
    pub quizzes: Vec<QuizSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

// ─── Timestamps ──────────────────────────────────────────────────

/// Parse RFC 3339, falling back to a naive timestamp taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

fn optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_style_uses_hyphenated_wire_name() {
        let json = serde_json::to_string(&LearningStyle::HandsOn).unwrap();
        assert_eq!(json, "\"hands-on\"");
    }

    #[test]
    fn test_unknown_difficulty_maps_to_other() {
        let d: Difficulty = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(d, Difficulty::Other);
    }

    #[test]
    fn test_timestamps_with_and_without_offset() {
        assert!(parse_timestamp("2025-03-01T10:00:00+00:00").is_some());
        assert!(parse_timestamp("2025-03-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_quiz_session_accepts_either_id_field() {
        let body = r#"{"quiz_session_id": "q-1", "topic": "arrays", "level": "beginner",
            "total_questions": 0, "questions": []}"#;
        let wire: QuizSessionWire = serde_json::from_str(body).unwrap();
        assert_eq!(wire.into_session().unwrap().id, "q-1");

        let body = r#"{"topic": "arrays", "level": "beginner", "total_questions": 0}"#;
        let wire: QuizSessionWire = serde_json::from_str(body).unwrap();
        assert!(wire.into_session().is_none());
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            proficiency_level: Some(Level::Advanced),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"proficiency_level":"advanced"}"#);
    }
}
