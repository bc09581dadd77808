//! # Introduction
//!
//! tutortty is a terminal client for an AI tutoring backend. A learner
//! creates a profile, asks for topic explanations and practice questions,
//! takes timed quizzes and reviews their progress. Alongside the tutor sit
//! animated visualizers for five classic data structures.
//!
//! ## Layout
//!
//! ```text
//! api ──▶ ui::worker ──▶ ui::App ◀── learning
//!                          │
//!                          ▼
//!                 visualizers ◀── tree, animation
//! ```
//!
//! 1. [`api`]: wire types and the blocking HTTP client.
//! 2. [`learning`]: profile wizard, quiz player, results and analytics,
//!    independent of the terminal.
//! 3. [`tree`]: the binary search tree model and its layout.
//! 4. [`animation`]: timed highlight and message cues.
//! 5. [`visualizers`]: array, stack, queue, linked list and tree widgets.
//! 6. [`ui`]: ratatui front end; not part of the stable library API.
//!
//! [`config`], [`session`], [`logging`] and [`cli`] cover start-up.

pub mod animation;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod learning;
pub mod logging;
pub mod session;
pub mod tree;
pub mod ui;
pub mod visualizers;
