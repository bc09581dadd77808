//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: screen state machine, key handling and the event loop
//! - **[`panes`]**: stateless render functions, one module per screen
//! - **[`controls`]**: key bindings and operand entry for the visualizers
//! - **[`worker`]**: runs backend calls off the UI thread
//! - **[`theme`]**: colour palette shared by every pane
//!
//! Construct an [`App`] with a [`TutorApi`] and call [`App::run`].
//!
//! [`TutorApi`]: crate::api::TutorApi
//! [`App::run`]: app::App::run

pub mod app;
pub mod controls;
pub mod panes;
pub mod theme;
pub mod worker;

pub use app::App;
