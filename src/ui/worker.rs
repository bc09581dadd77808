//! Backend calls off the UI thread
//!
//! Each [`Request`] runs on its own short-lived thread and reports back as an
//! [`Outcome`] over a channel the event loop drains every frame.

use crate::api::types::*;
use crate::api::TutorApi;
use crate::error::ApiError;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Health,
    CreateProfile(ProfileCreate),
    RefreshProfile(String),
    UpdateProfile {
        username: String,
        update: ProfileUpdate,
    },
    LearningHistory {
        username: String,
        limit: u32,
    },
    Greeting(GreetingRequest),
    Explain(TopicRequest),
    Practice(PracticeRequest),
    GenerateQuiz(QuizGenerateRequest),
    SubmitQuiz(QuizSubmission),
    QuizHistory {
        username: String,
        limit: u32,
    },
}

impl Request {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Request::Health => "health",
            Request::CreateProfile(_) => "create_profile",
            Request::RefreshProfile(_) => "get_profile",
            Request::UpdateProfile { .. } => "update_profile",
            Request::LearningHistory { .. } => "learning_history",
            Request::Greeting(_) => "greeting",
            Request::Explain(_) => "explain",
            Request::Practice(_) => "practice",
            Request::GenerateQuiz(_) => "generate_quiz",
            Request::SubmitQuiz(_) => "submit_quiz",
            Request::QuizHistory { .. } => "quiz_history",
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Health(Result<HealthStatus, ApiError>),
    /// Answer to both create and refresh
    Profile(Result<FullProfile, ApiError>),
    ProfileUpdated(Result<Profile, ApiError>),
    LearningHistory(Result<Vec<LearningSession>, ApiError>),
    Greeting(Result<GreetingResponse, ApiError>),
    Explanation(Result<TopicResponse, ApiError>),
    Practice(Result<PracticeResponse, ApiError>),
    Quiz(Result<QuizSession, ApiError>),
    Results(Result<QuizResults, ApiError>),
    QuizHistory(Result<QuizHistory, ApiError>),
}

/// Run `request` against `api` on the calling thread
pub fn execute(api: &dyn TutorApi, request: Request) -> Outcome {
    match request {
        Request::Health => Outcome::Health(api.health()),
        Request::CreateProfile(profile) => Outcome::Profile(api.create_profile(&profile)),
        Request::RefreshProfile(username) => Outcome::Profile(api.get_profile(&username)),
        Request::UpdateProfile { username, update } => {
            Outcome::ProfileUpdated(api.update_profile(&username, &update))
        }
        Request::LearningHistory { username, limit } => {
            Outcome::LearningHistory(api.learning_history(&username, limit))
        }
        Request::Greeting(req) => Outcome::Greeting(api.greeting(&req)),
        Request::Explain(req) => Outcome::Explanation(api.explain_topic(&req)),
        Request::Practice(req) => Outcome::Practice(api.practice_questions(&req)),
        Request::GenerateQuiz(req) => Outcome::Quiz(api.generate_quiz(&req)),
        Request::SubmitQuiz(submission) => Outcome::Results(api.submit_quiz(&submission)),
        Request::QuizHistory { username, limit } => {
            Outcome::QuizHistory(api.quiz_history(&username, limit))
        }
    }
}

/// Numbers each submitted request so the app can tell a late reply from a current one
pub type Ticket = u64;

/// A finished request and the ticket it was submitted under
#[derive(Debug)]
pub struct Reply {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

pub struct Worker {
    api: Arc<dyn TutorApi>,
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
    next_ticket: Ticket,
}

impl Worker {
    pub fn new(api: Arc<dyn TutorApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Worker {
            api,
            tx,
            rx,
            next_ticket: 1,
        }
    }

    /// Start `request` in the background; its reply carries the returned ticket
    pub fn submit(&mut self, request: Request) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let name = request.name();
        debug!(request = name, ticket, "dispatching");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("api-{}", name))
            .spawn(move || {
                let outcome = execute(api.as_ref(), request);
                // receiver gone means the app is shutting down
                let _ = tx.send(Reply { ticket, outcome });
            });
        if let Err(e) = spawned {
            warn!(request = name, error = %e, "could not start worker thread");
        }
        ticket
    }

    /// Next finished request, if any
    pub fn try_recv(&mut self) -> Option<Reply> {
        self.rx.try_recv().ok()
    }
}
