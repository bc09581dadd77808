//! Signed-in profile kept between runs
//!
//! After a profile is created the backend's response is written to a small
//! JSON file; the next launch reads it back and skips the setup wizard.

use crate::api::types::FullProfile;
use crate::error::SessionError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// Store under the user data directory
    pub fn in_data_dir() -> Result<Self, SessionError> {
        let dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Ok(Self::new(dir.join("tutortty").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored profile, or `None` when nobody has signed up yet
    pub fn load(&self) -> Result<Option<FullProfile>, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored session");
                return Ok(None);
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let profile = serde_json::from_str(&content).map_err(|source| SessionError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(profile))
    }

    pub fn save(&self, profile: &FullProfile) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(profile).map_err(|source| SessionError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(user = %profile.user.username, "session saved");
        Ok(())
    }

    /// Forget the stored profile
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
