//! Runtime configuration
//!
//! Settings come from, in increasing priority: built-in defaults, the TOML
//! file (`<config dir>/tutortty/config.toml` or `--config`), the
//! `TUTORTTY_API_URL` environment variable, and command-line flags.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides the backend URL
pub const API_URL_ENV: &str = "TUTORTTY_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// How many completed quizzes the analytics screen pulls
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
    /// Where the signed-in profile is kept; defaults to the user data dir
    #[serde(default)]
    pub session_file: Option<PathBuf>,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_num_questions")]
    pub num_questions: u8,
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            history_limit: default_history_limit(),
            session_file: None,
            quiz: QuizConfig::default(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            num_questions: default_num_questions(),
            time_limit_secs: default_time_limit(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_history_limit() -> u32 {
    10
}
fn default_num_questions() -> u8 {
    5
}
fn default_time_limit() -> u64 {
    300
}

/// Quiz length the backend accepts
pub const QUIZ_QUESTIONS_RANGE: std::ops::RangeInclusive<u8> = 3..=10;

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tutortty").join("config.toml"))
    }

    /// Load from `path`, or from the default location when it exists.
    ///
    /// A missing default file is not an error; a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => Self::from_file(&p)?,
                None => {
                    debug!("no config file, using defaults");
                    Config::default()
                }
            },
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            debug!(%url, "API URL taken from environment");
            config.api_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the URL parses and pull the quiz length into range
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.quiz.num_questions = self
            .quiz
            .num_questions
            .clamp(*QUIZ_QUESTIONS_RANGE.start(), *QUIZ_QUESTIONS_RANGE.end());
        Ok(())
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.quiz.num_questions, 5);
        assert_eq!(config.quiz.time_limit_secs, 300);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            api_url = "https://tutor.example"

            [quiz]
            time_limit_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://tutor.example");
        assert_eq!(config.quiz.time_limit_secs, 120);
        assert_eq!(config.quiz.num_questions, 5);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_from_file_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = [").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_clamps_quiz_length() {
        let mut config = Config::default();
        config.quiz.num_questions = 50;
        config.validate().unwrap();
        assert_eq!(config.quiz.num_questions, 10);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = Config {
            api_url: "ftp://tutor.example".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
        config.api_url = "localhost".to_string();
        assert!(config.validate().is_err());
    }
}
