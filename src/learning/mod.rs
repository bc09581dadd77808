//! Client-side logic of the learning screens
//!
//! The backend does the heavy lifting (explanations, question generation,
//! grading). What stays on this side is small but worth keeping out of the
//! UI code:
//!
//! - [`profile`]: the three-step sign-up wizard and its validation
//! - [`quiz`]: the quiz player (navigation, answers, countdown, submission)
//! - [`results`]: score bands and per-difficulty breakdown of a graded quiz
//! - [`analytics`]: statistics over the quiz history

pub mod analytics;
pub mod profile;
pub mod quiz;
pub mod results;

/// Round half up, the way the web client rounds percentages
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `m:ss` rendering of a number of seconds
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(66.666), 67);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(0), "0:00");
    }
}
