//! Typed client for the tutor backend
//!
//! [`TutorApi`] is the seam the UI talks to; [`HttpTutorClient`] implements it
//! over blocking HTTP. Calls are made from worker threads (see
//! [`crate::ui::worker`]) so the blocking client never stalls the event loop.

pub mod types;

use crate::error::ApiError;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use types::*;

/// Every backend operation the client needs
pub trait TutorApi: Send + Sync {
    fn health(&self) -> Result<HealthStatus, ApiError>;

    fn create_profile(&self, profile: &ProfileCreate) -> Result<FullProfile, ApiError>;

    /// Fetch the latest copy of a profile
    fn get_profile(&self, username: &str) -> Result<FullProfile, ApiError>;

    fn update_profile(&self, username: &str, update: &ProfileUpdate)
        -> Result<Profile, ApiError>;

    fn learning_history(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<LearningSession>, ApiError>;

    fn greeting(&self, request: &GreetingRequest) -> Result<GreetingResponse, ApiError>;

    fn explain_topic(&self, request: &TopicRequest) -> Result<TopicResponse, ApiError>;

    fn practice_questions(&self, request: &PracticeRequest)
        -> Result<PracticeResponse, ApiError>;

    fn generate_quiz(&self, request: &QuizGenerateRequest) -> Result<QuizSession, ApiError>;

    fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResults, ApiError>;

    /// Completed quizzes, newest first
    fn quiz_history(&self, username: &str, limit: u32) -> Result<QuizHistory, ApiError>;
}

/// Error body the backend sends with non-success statuses
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Blocking HTTP implementation of [`TutorApi`]
#[derive(Debug, Clone)]
pub struct HttpTutorClient {
    http: Client,
    base: Url,
}

impl HttpTutorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::from)?;
        Ok(HttpTutorClient { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL extended with `segments`, each percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn with_limit(mut url: Url, limit: u32) -> Url {
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        url
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send()?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "backend responded");

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            let detail = response
                .text()
                .ok()
                .map(|body| error_detail(&body).unwrap_or_else(|| reason.to_string()))
                .unwrap_or_else(|| reason.to_string());
            warn!(status = status.as_u16(), %detail, "backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<T>().map_err(ApiError::from)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.send(self.http.get(url))
    }

    fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.post(url).json(body))
    }
}

/// Pull the human-readable `detail` out of an error body
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(detail) => Some(detail),
        // validation errors arrive as a list of objects with a `msg`
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl TutorApi for HttpTutorClient {
    fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get(self.endpoint(&["health"])?)
    }

    fn create_profile(&self, profile: &ProfileCreate) -> Result<FullProfile, ApiError> {
        self.post(self.endpoint(&["api", "profile", "create"])?, profile)
    }

    fn get_profile(&self, username: &str) -> Result<FullProfile, ApiError> {
        self.get(self.endpoint(&["api", "profile", username])?)
    }

    fn update_profile(
        &self,
        username: &str,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let url = self.endpoint(&["api", "profile", username, "update"])?;
        self.send(self.http.put(url).json(update))
    }

    fn learning_history(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<LearningSession>, ApiError> {
        let url = self.endpoint(&["api", "profile", username, "history"])?;
        self.get(Self::with_limit(url, limit))
    }

    fn greeting(&self, request: &GreetingRequest) -> Result<GreetingResponse, ApiError> {
        self.post(self.endpoint(&["api", "learning", "greeting"])?, request)
    }

    fn explain_topic(&self, request: &TopicRequest) -> Result<TopicResponse, ApiError> {
        self.post(self.endpoint(&["api", "learning", "explain"])?, request)
    }

    fn practice_questions(
        &self,
        request: &PracticeRequest,
    ) -> Result<PracticeResponse, ApiError> {
        self.post(self.endpoint(&["api", "learning", "practice"])?, request)
    }

    fn generate_quiz(&self, request: &QuizGenerateRequest) -> Result<QuizSession, ApiError> {
        let wire: QuizSessionWire =
            self.post(self.endpoint(&["api", "quiz", "generate"])?, request)?;
        wire.into_session().ok_or(ApiError::MissingQuizId)
    }

    fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResults, ApiError> {
        self.post(self.endpoint(&["api", "quiz", "submit"])?, submission)
    }

    fn quiz_history(&self, username: &str, limit: u32) -> Result<QuizHistory, ApiError> {
        let url = self.endpoint(&["api", "quiz", username, "history"])?;
        self.get(Self::with_limit(url, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpTutorClient {
        HttpTutorClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("http://localhost:8000");
        let url = c.endpoint(&["api", "quiz", "generate"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/quiz/generate");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_username() {
        let c = client("http://tutor.example/backend/");
        let url = c.endpoint(&["api", "profile", "ada lovelace"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://tutor.example/backend/api/profile/ada%20lovelace"
        );
    }

    #[test]
    fn test_history_limit_is_a_query_pair() {
        let c = client("http://localhost:8000");
        let url = HttpTutorClient::with_limit(c.endpoint(&["api", "quiz", "sam", "history"]).unwrap(), 10);
        assert_eq!(url.as_str(), "http://localhost:8000/api/quiz/sam/history?limit=10");
    }

    #[test]
    fn test_error_detail_from_string() {
        let body = r#"{"detail": "Username 'sam' is already taken!"}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("Username 'sam' is already taken!")
        );
    }

    #[test]
    fn test_error_detail_from_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
        assert_eq!(error_detail(body).as_deref(), Some("field required"));
    }

    #[test]
    fn test_error_detail_missing() {
        assert_eq!(error_detail("Internal Server Error"), None);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpTutorClient::new("not a url", Duration::from_secs(1)),
            Err(ApiError::Url(_))
        ));
    }
}
