//! Error types
//!
//! Tree and visualizer commands have no failure modes. Everything that talks
//! to the outside world (the backend, the session file, the config file)
//! reports through the enums below; [`TutorError`] aggregates them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    /// Non-success status; `detail` is the server's explanation when it sent one
    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    Url(String),

    #[error("quiz response did not include a session id")]
    MissingQuizId,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Url(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("cannot access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt session file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no data directory available for the session file")]
    NoDataDir,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
