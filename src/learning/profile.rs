//! Sign-up wizard
//!
//! Three steps: basic info (username, email, optional topics), proficiency
//! level, learning style. Only the first step can be invalid.

use crate::api::types::{LearningStyle, Level, ProfileCreate};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    BasicInfo,
    Level,
    Style,
}

impl SetupStep {
    /// 1-based position, for the progress indicator
    pub fn number(self) -> usize {
        match self {
            SetupStep::BasicInfo => 1,
            SetupStep::Level => 2,
            SetupStep::Style => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupStep::BasicInfo => "Basic Info",
            SetupStep::Level => "Your Level",
            SetupStep::Style => "Learning Style",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Username must be 2-100 characters")]
    Username,
    #[error("Email must be 5-255 characters")]
    EmailLength,
    #[error("Email must contain '@'")]
    EmailFormat,
}

/// Which text field of the first step has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Username,
    Email,
    Topics,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Username => DraftField::Email,
            DraftField::Email => DraftField::Topics,
            DraftField::Topics => DraftField::Username,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub step: SetupStep,
    pub field: DraftField,
    pub username: String,
    pub email: String,
    /// Comma separated
    pub topics: String,
    pub level: Level,
    pub style: LearningStyle,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        ProfileDraft {
            step: SetupStep::BasicInfo,
            field: DraftField::Username,
            username: String::new(),
            email: String::new(),
            topics: String::new(),
            level: Level::default(),
            style: LearningStyle::default(),
        }
    }
}

impl ProfileDraft {
    /// Text of the focused field
    pub fn field_mut(&mut self) -> &mut String {
        match self.field {
            DraftField::Username => &mut self.username,
            DraftField::Email => &mut self.email,
            DraftField::Topics => &mut self.topics,
        }
    }

    pub fn validate_basic_info(&self) -> Result<(), DraftError> {
        let username = self.username.trim().chars().count();
        if !(2..=100).contains(&username) {
            return Err(DraftError::Username);
        }
        let email = self.email.trim();
        if !(5..=255).contains(&email.chars().count()) {
            return Err(DraftError::EmailLength);
        }
        if !email.contains('@') {
            return Err(DraftError::EmailFormat);
        }
        Ok(())
    }

    /// Move to the next step. Returns `true` once the last step is confirmed
    /// and the draft is ready to submit.
    pub fn advance(&mut self) -> Result<bool, DraftError> {
        match self.step {
            SetupStep::BasicInfo => {
                self.validate_basic_info()?;
                self.step = SetupStep::Level;
                Ok(false)
            }
            SetupStep::Level => {
                self.step = SetupStep::Style;
                Ok(false)
            }
            SetupStep::Style => Ok(true),
        }
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            SetupStep::BasicInfo | SetupStep::Level => SetupStep::BasicInfo,
            SetupStep::Style => SetupStep::Level,
        };
    }

    /// Cycle the choice on the level/style steps
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.step {
            SetupStep::BasicInfo => {}
            SetupStep::Level => self.level = cycle(&Level::ALL, self.level, forward),
            SetupStep::Style => self.style = cycle(&LearningStyle::ALL, self.style, forward),
        }
    }

    pub fn preferred_topics(&self) -> Vec<String> {
        self.topics
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn to_request(&self) -> ProfileCreate {
        ProfileCreate {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            proficiency_level: self.level,
            learning_style: self.style,
            preferred_topics: self.preferred_topics(),
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let pos = all.iter().position(|&x| x == current).unwrap_or(0);
    let len = all.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfileDraft {
        ProfileDraft {
            username: "sam".into(),
            email: "sam@example.com".into(),
            topics: "arrays, , linked lists".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_info_is_required() {
        let mut draft = ProfileDraft::default();
        assert_eq!(draft.advance(), Err(DraftError::Username));
        assert_eq!(draft.step, SetupStep::BasicInfo);

        draft.username = "sam".into();
        draft.email = "sam.example.com".into();
        assert_eq!(draft.advance(), Err(DraftError::EmailFormat));
    }

    #[test]
    fn test_walks_all_steps() {
        let mut draft = filled();
        assert_eq!(draft.advance(), Ok(false));
        draft.cycle_choice(true);
        assert_eq!(draft.level, Level::Intermediate);
        assert_eq!(draft.advance(), Ok(false));
        draft.cycle_choice(false);
        assert_eq!(draft.style, LearningStyle::Conceptual);
        assert_eq!(draft.advance(), Ok(true));

        let request = draft.to_request();
        assert_eq!(request.preferred_topics, vec!["arrays", "linked lists"]);
        assert_eq!(request.proficiency_level, Level::Intermediate);
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut draft = filled();
        draft.advance().unwrap();
        draft.back();
        draft.back();
        assert_eq!(draft.step, SetupStep::BasicInfo);
    }
}
