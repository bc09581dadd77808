// Shared fixtures: canned backend data and an in-memory tutor backend

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use tutortty::api::types::*;
use tutortty::api::TutorApi;
use tutortty::error::ApiError;

pub fn profile(username: &str) -> FullProfile {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    FullProfile {
        user: User {
            id: "u-1".into(),
            username: username.into(),
            email: format!("{}@example.com", username),
            is_active: true,
            created_at,
        },
        profile: Profile {
            id: "p-1".into(),
            user_id: "u-1".into(),
            proficiency_level: Level::Beginner,
            learning_style: LearningStyle::Visual,
            preferred_topics: vec!["trees".into()],
            total_sessions: "3".into(),
            created_at,
        },
        recent_sessions: vec![LearningSession {
            id: "s-1".into(),
            topic: "linked lists".into(),
            level: "beginner".into(),
            word_count: 420,
            estimated_reading_time: 2,
            created_at,
        }],
        total_topics_studied: 1,
    }
}

fn options() -> BTreeMap<String, String> {
    ["A", "B", "C", "D"]
        .iter()
        .map(|l| (l.to_string(), format!("option {}", l)))
        .collect()
}

pub fn quiz(topic: &str, count: u32) -> QuizSession {
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    QuizSession {
        id: "quiz-1".into(),
        topic: topic.into(),
        level: "beginner".into(),
        total_questions: count,
        questions: (1..=count)
            .map(|n| QuizQuestion {
                id: format!("q{}", n),
                question_number: n,
                question_text: format!("Question about {} #{}", topic, n),
                options: options(),
                difficulty: difficulties[(n as usize - 1) % 3],
            })
            .collect(),
        started_at: None,
    }
}

pub fn summary(topic: &str, score: f64, day: u32) -> QuizSummary {
    QuizSummary {
        id: format!("{}-{}", topic, day),
        topic: topic.into(),
        score,
        correct_answers: (score / 20.0) as u32,
        total_questions: 5,
        time_taken: Some(95),
        completed_at: Some(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()),
        questions: vec![HistoryQuestion {
            question_text: "What is a leaf?".into(),
            user_answer: Some("B".into()),
            correct_answer: "B".into(),
            is_correct: Some(true),
            difficulty: Difficulty::Easy,
            explanation: None,
            options: options(),
        }],
    }
}

/// Answers every call from memory and records which endpoints were hit.
/// Every question's correct answer is "B".
#[derive(Default)]
pub struct FakeTutor {
    pub calls: Mutex<Vec<&'static str>>,
    pub created: Mutex<Vec<ProfileCreate>>,
    pub submissions: Mutex<Vec<QuizSubmission>>,
    pub fail_quiz: bool,
}

impl FakeTutor {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| *c == call)
    }
}

impl TutorApi for FakeTutor {
    fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record("health");
        Ok(HealthStatus {
            status: "healthy".into(),
        })
    }

    fn create_profile(&self, request: &ProfileCreate) -> Result<FullProfile, ApiError> {
        self.record("create_profile");
        self.created.lock().unwrap().push(request.clone());
        let mut created = profile(&request.username);
        created.profile.proficiency_level = request.proficiency_level;
        created.profile.learning_style = request.learning_style;
        created.recent_sessions.clear();
        Ok(created)
    }

    fn get_profile(&self, username: &str) -> Result<FullProfile, ApiError> {
        self.record("get_profile");
        Ok(profile(username))
    }

    fn update_profile(&self, username: &str, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.record("update_profile");
        let mut updated = profile(username).profile;
        if let Some(level) = update.proficiency_level {
            updated.proficiency_level = level;
        }
        if let Some(style) = update.learning_style {
            updated.learning_style = style;
        }
        Ok(updated)
    }

    fn learning_history(&self, username: &str, _limit: u32) -> Result<Vec<LearningSession>, ApiError> {
        self.record("learning_history");
        Ok(profile(username).recent_sessions)
    }

    fn greeting(&self, request: &GreetingRequest) -> Result<GreetingResponse, ApiError> {
        self.record("greeting");
        Ok(GreetingResponse {
            greeting: format!("Welcome back, {}!", request.student_name),
            student_name: request.student_name.clone(),
            level: request.level.to_string(),
        })
    }

    fn explain_topic(&self, request: &TopicRequest) -> Result<TopicResponse, ApiError> {
        self.record("explain_topic");
        Ok(TopicResponse {
            topic: request.topic.clone(),
            level: request.level.to_string(),
            explanation: format!("# {}\n\n- first idea\n- second idea", request.topic),
            word_count: 8,
            estimated_reading_time: 1,
            model_used: "fake".into(),
        })
    }

    fn practice_questions(&self, request: &PracticeRequest) -> Result<PracticeResponse, ApiError> {
        self.record("practice_questions");
        Ok(PracticeResponse {
            topic: request.topic.clone(),
            level: request.level.to_string(),
            questions: "1. Why?\n2. How?".into(),
            count: 2,
        })
    }

    fn generate_quiz(&self, request: &QuizGenerateRequest) -> Result<QuizSession, ApiError> {
        self.record("generate_quiz");
        if self.fail_quiz {
            return Err(ApiError::Status {
                status: 503,
                detail: "model unavailable".into(),
            });
        }
        Ok(quiz(&request.topic, u32::from(request.num_questions)))
    }

    fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResults, ApiError> {
        self.record("submit_quiz");
        self.submissions.lock().unwrap().push(submission.clone());
        let session = quiz("graphs", 3);
        let questions: Vec<QuestionResult> = session
            .questions
            .iter()
            .map(|q| {
                let user_answer = submission.answers.get(&q.id).cloned();
                QuestionResult {
                    question_number: q.question_number,
                    question_text: q.question_text.clone(),
                    options: q.options.clone(),
                    is_correct: user_answer.as_deref() == Some("B"),
                    user_answer,
                    correct_answer: "B".into(),
                    explanation: "B is right".into(),
                    difficulty: q.difficulty,
                }
            })
            .collect();
        let correct = questions.iter().filter(|q| q.is_correct).count() as u32;
        let tally = |d: Difficulty| {
            let of = questions.iter().filter(|q| q.difficulty == d);
            (
                of.clone().filter(|q| q.is_correct).count() as u32,
                of.count() as u32,
            )
        };
        let (easy_correct, easy_total) = tally(Difficulty::Easy);
        let (medium_correct, medium_total) = tally(Difficulty::Medium);
        let (hard_correct, hard_total) = tally(Difficulty::Hard);
        let score = f64::from(correct) * 100.0 / questions.len() as f64;
        Ok(QuizResults {
            quiz_id: submission.quiz_session_id.clone(),
            topic: "graphs".into(),
            total_questions: questions.len() as u32,
            correct_answers: correct,
            score,
            time_taken: submission.time_taken,
            passed: score >= 60.0,
            questions,
            easy_correct,
            easy_total,
            medium_correct,
            medium_total,
            hard_correct,
            hard_total,
            feedback: "Keep going".into(),
        })
    }

    fn quiz_history(&self, _username: &str, _limit: u32) -> Result<QuizHistory, ApiError> {
        self.record("quiz_history");
        // newest first
        Ok(QuizHistory {
            quizzes: vec![
                summary("graphs", 80.0, 3),
                summary("trees", 60.0, 2),
                summary("graphs", 40.0, 1),
            ],
        })
    }
}
