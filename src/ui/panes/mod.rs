//! TUI pane rendering modules
//!
//! Every screen is drawn by a stateless `render_*` function that takes the
//! frame, its area and the data to show.
//!
//! # Pane Modules
//!
//! - [`profile`]: three-step sign-up wizard
//! - [`dashboard`]: greeting, profile summary, topic field and actions
//! - [`reading`]: topic explanation and practice question text
//! - [`quiz`]: question, options, progress and countdown
//! - [`results`]: score, difficulty breakdown and answer review
//! - [`analytics`]: statistics, score chart and quiz table
//! - [`visualizer`]: widget picker and the frame around each widget
//! - [`tree`], [`sequence`]: the widgets themselves
//! - [`status`]: status bar with key hints

mod utils;

pub mod analytics;
pub mod dashboard;
pub mod profile;
pub mod quiz;
pub mod reading;
pub mod results;
pub mod sequence;
pub mod status;
pub mod tree;
pub mod visualizer;

pub use analytics::render_analytics;
pub use dashboard::{render_dashboard, DashboardRenderData};
pub use profile::render_profile_setup;
pub use quiz::render_quiz;
pub use reading::{render_explanation, render_practice};
pub use results::render_results;
pub use status::{render_status_bar, StatusRenderData};
pub use visualizer::{render_visualizer, render_visualizer_menu};
