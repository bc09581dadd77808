//! Main TUI application state and logic

use super::controls::{self, OperandInput, Operand};
use super::panes::{self, DashboardRenderData, StatusRenderData};
use super::worker::{Outcome, Reply, Request, Ticket, Worker};
use crate::api::types::*;
use crate::api::TutorApi;
use crate::config::{Config, QUIZ_QUESTIONS_RANGE};
use crate::error::ApiError;
use crate::learning::analytics::Analytics;
use crate::learning::profile::{ProfileDraft, SetupStep};
use crate::learning::quiz::QuizPlayer;
use crate::session::SessionStore;
use crate::visualizers::{Visualizer, VisualizerKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rustc_hash::FxHashSet;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long the loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Longest topic the dashboard accepts
const TOPIC_MAX_LEN: usize = 100;

/// What fills the main area
pub enum Screen {
    ProfileSetup(ProfileDraft),
    Dashboard,
    Explanation(TopicResponse),
    Practice(PracticeResponse),
    Quiz(QuizPlayer),
    Results(QuizResults),
    Analytics(Analytics),
    VisualizerMenu {
        selected: usize,
    },
    Visualizer {
        visualizer: Visualizer,
        input: OperandInput,
    },
}

/// Backend request the user is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Profile,
    Explanation,
    Practice,
    Quiz,
    Grading,
    Analytics,
}

impl Pending {
    pub fn label(self) -> &'static str {
        match self {
            Pending::Profile => "Creating your profile...",
            Pending::Explanation => "Generating explanation...",
            Pending::Practice => "Generating practice questions...",
            Pending::Quiz => "Generating quiz...",
            Pending::Grading => "Grading your answers...",
            Pending::Analytics => "Loading analytics...",
        }
    }
}

/// The main application state
pub struct App {
    pub screen: Screen,

    /// Signed-in learner, if any
    pub profile: Option<FullProfile>,
    pub greeting: Option<String>,
    pub recent: Vec<LearningSession>,

    /// Dashboard topic field
    pub topic: String,
    pub editing_topic: bool,
    pub quiz_length: u8,

    pub pending: Option<Pending>,
    pub status_message: String,
    pub status_is_error: bool,

    /// Scroll offset of the long-text screens
    pub scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    config: Config,
    session: SessionStore,
    worker: Worker,
    /// Ticket of the request behind `pending`
    pending_ticket: Option<Ticket>,
    /// Profile, greeting and history requests for the signed-in learner
    background: FxHashSet<Ticket>,
    last_quiz_topic: String,
    /// Set once the countdown has fired a submission for the current quiz
    auto_submitted: bool,
}

impl App {
    /// Create the app. With a stored `profile` it opens on the dashboard,
    /// otherwise on the setup wizard.
    pub fn new(
        api: Arc<dyn TutorApi>,
        config: Config,
        session: SessionStore,
        profile: Option<FullProfile>,
    ) -> Self {
        let mut app = App {
            screen: Screen::ProfileSetup(ProfileDraft::default()),
            profile: None,
            greeting: None,
            recent: Vec::new(),
            topic: String::new(),
            editing_topic: false,
            quiz_length: config.quiz.num_questions,
            pending: None,
            status_message: String::from("Ready!"),
            status_is_error: false,
            scroll: 0,
            should_quit: false,
            config,
            session,
            worker: Worker::new(api),
            pending_ticket: None,
            background: FxHashSet::default(),
            last_quiz_topic: String::new(),
            auto_submitted: false,
        };

        app.worker.submit(Request::Health);
        if let Some(profile) = profile {
            app.recent = profile.recent_sessions.clone();
            app.profile = Some(profile);
            app.screen = Screen::Dashboard;
            app.refresh_profile();
        }
        app
    }

    /// Jump straight to a visualizer
    pub fn open_visualizer(&mut self, kind: VisualizerKind, values: Option<Vec<i64>>) {
        info!(%kind, "opening visualizer");
        self.screen = Screen::Visualizer {
            visualizer: Visualizer::open(kind, values),
            input: OperandInput::default(),
        };
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|f| self.render(f, now))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply finished requests, advance animations, enforce the quiz clock
    pub fn tick(&mut self, now: Instant) {
        while let Some(reply) = self.worker.try_recv() {
            self.handle_reply(reply, now);
        }

        if let Screen::Visualizer { visualizer, .. } = &mut self.screen {
            visualizer.tick(now);
        }

        let expired = matches!(&self.screen, Screen::Quiz(player) if player.timed_out(now));
        if expired && !self.auto_submitted && self.pending.is_none() {
            info!("quiz time expired");
            self.auto_submitted = true;
            self.submit_quiz(now);
            self.set_status("Time's up! Submitting your answers...");
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());
        let body = chunks[0];

        let grading = self.pending == Some(Pending::Grading);
        match &mut self.screen {
            Screen::ProfileSetup(draft) => panes::render_profile_setup(frame, body, draft),
            Screen::Dashboard => {
                let data = DashboardRenderData {
                    profile: self.profile.as_ref(),
                    greeting: self.greeting.as_deref(),
                    recent: &self.recent,
                    topic: &self.topic,
                    editing_topic: self.editing_topic,
                    quiz_length: self.quiz_length,
                };
                panes::render_dashboard(frame, body, &data);
            }
            Screen::Explanation(explanation) => {
                panes::render_explanation(frame, body, explanation, &mut self.scroll)
            }
            Screen::Practice(practice) => {
                panes::render_practice(frame, body, practice, &mut self.scroll)
            }
            Screen::Quiz(player) => panes::render_quiz(frame, body, player, now, grading),
            Screen::Results(results) => {
                panes::render_results(frame, body, results, &mut self.scroll)
            }
            Screen::Analytics(analytics) => {
                panes::render_analytics(frame, body, analytics, &mut self.scroll)
            }
            Screen::VisualizerMenu { selected } => {
                panes::render_visualizer_menu(frame, body, *selected)
            }
            Screen::Visualizer { visualizer, input } => {
                panes::render_visualizer(frame, body, visualizer, input, now)
            }
        }

        let hints = self.key_hints();
        panes::render_status_bar(
            frame,
            chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                loading: self.pending.map(Pending::label),
                hints: &hints,
            },
        );
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match &self.screen {
            Screen::ProfileSetup(draft) if draft.step == SetupStep::BasicInfo => {
                vec![("Tab", "field"), ("↵", "next"), ("Esc", "quit")]
            }
            Screen::ProfileSetup(_) => vec![("↑/↓", "choose"), ("↵", "next"), ("Esc", "back")],
            Screen::Dashboard if self.editing_topic => vec![("↵", "done"), ("Esc", "done")],
            Screen::Dashboard => vec![
                ("t", "topic"),
                ("e", "explain"),
                ("p", "practice"),
                ("z", "quiz"),
                ("a", "analytics"),
                ("v", "visualize"),
                ("q", "quit"),
            ],
            Screen::Explanation(_) => vec![
                ("↑/↓", "scroll"),
                ("p", "practice"),
                ("z", "quiz"),
                ("Esc", "back"),
            ],
            Screen::Practice(_) => vec![("↑/↓", "scroll"), ("Esc", "back")],
            Screen::Quiz(_) => vec![
                ("A-D", "answer"),
                ("←/→", "move"),
                ("s", "submit"),
                ("Esc", "abandon"),
            ],
            Screen::Results(_) => vec![
                ("↑/↓", "scroll"),
                ("r", "retake"),
                ("a", "analytics"),
                ("Esc", "home"),
            ],
            Screen::Analytics(_) => vec![("↑/↓", "scroll"), ("r", "reload"), ("Esc", "home")],
            Screen::VisualizerMenu { .. } => vec![("↑/↓", "select"), ("↵", "open"), ("Esc", "back")],
            Screen::Visualizer { .. } => vec![
                ("0-9", "number"),
                ("Tab", "field"),
                ("r", "reset"),
                ("Esc", "menu"),
            ],
        }
    }

    // ─── Keys ────────────────────────────────────────────────────

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::ProfileSetup(_) => self.handle_setup_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Explanation(_) | Screen::Practice(_) => self.handle_reading_key(key),
            Screen::Quiz(_) => self.handle_quiz_key(key, now),
            Screen::Results(_) => self.handle_results_key(key),
            Screen::Analytics(_) => self.handle_analytics_key(key),
            Screen::VisualizerMenu { .. } => self.handle_menu_key(key),
            Screen::Visualizer { .. } => self.handle_visualizer_key(key, now),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        if self.pending.is_some() {
            return;
        }
        let Screen::ProfileSetup(draft) = &mut self.screen else {
            return;
        };

        let mut ready = false;
        let mut error = None;
        match (draft.step, key.code) {
            (_, KeyCode::Enter) => match draft.advance() {
                Ok(done) => ready = done,
                Err(e) => error = Some(e.to_string()),
            },
            (SetupStep::BasicInfo, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Esc) => draft.back(),
            (SetupStep::BasicInfo, KeyCode::Tab | KeyCode::Down) => {
                draft.field = draft.field.next()
            }
            (SetupStep::BasicInfo, KeyCode::BackTab | KeyCode::Up) => {
                draft.field = draft.field.next().next()
            }
            (SetupStep::BasicInfo, KeyCode::Backspace) => {
                draft.field_mut().pop();
            }
            (SetupStep::BasicInfo, KeyCode::Char(c)) => draft.field_mut().push(c),
            (_, KeyCode::Up | KeyCode::Left | KeyCode::BackTab) => draft.cycle_choice(false),
            (_, KeyCode::Down | KeyCode::Right | KeyCode::Tab) => draft.cycle_choice(true),
            _ => {}
        }

        let request = ready.then(|| draft.to_request());
        if let Some(error) = error {
            self.set_error(error);
        } else if let Some(request) = request {
            info!(username = %request.username, "creating profile");
            self.start(Pending::Profile, Request::CreateProfile(request));
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if self.editing_topic {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.editing_topic = false,
                KeyCode::Backspace => {
                    self.topic.pop();
                }
                KeyCode::Char(c) if self.topic.chars().count() < TOPIC_MAX_LEN => {
                    self.topic.push(c)
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') | KeyCode::Char('/') => self.editing_topic = true,
            KeyCode::Char('e') => self.request_explanation(),
            KeyCode::Char('p') => self.request_practice(),
            KeyCode::Char('z') => {
                if let Some(topic) = self.require_topic() {
                    self.request_quiz(topic);
                }
            }
            KeyCode::Char('a') => self.request_analytics(),
            KeyCode::Char('v') => self.screen = Screen::VisualizerMenu { selected: 0 },
            KeyCode::Char('r') => {
                self.refresh_profile();
                self.set_status("Refreshing profile...");
            }
            KeyCode::Char('l') => self.change_level(),
            KeyCode::Char('s') => self.change_style(),
            KeyCode::Char('[') => self.adjust_quiz_length(-1),
            KeyCode::Char(']') => self.adjust_quiz_length(1),
            KeyCode::Char('x') => self.logout(),
            KeyCode::Esc => self.cancel_pending(),
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.go_home(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Char('p') if matches!(self.screen, Screen::Explanation(_)) => {
                self.request_practice()
            }
            KeyCode::Char('z') if matches!(self.screen, Screen::Explanation(_)) => {
                if let Some(topic) = self.require_topic() {
                    self.request_quiz(topic);
                }
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent, now: Instant) {
        if self.pending == Some(Pending::Grading) {
            return;
        }
        if key.code == KeyCode::Esc {
            info!("quiz abandoned");
            self.go_home();
            self.set_status("Quiz abandoned");
            return;
        }
        let Screen::Quiz(player) = &mut self.screen else {
            return;
        };

        let mut submit = false;
        match key.code {
            KeyCode::Left => player.previous(),
            KeyCode::Right => player.next(),
            KeyCode::Enter if player.is_last() => submit = true,
            KeyCode::Enter => player.next(),
            KeyCode::Char('s') => submit = true,
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                player.select(&c.to_string());
            }
            KeyCode::Char(c @ '1'..='4') => {
                let letter = (b'A' + (c as u8 - b'1')) as char;
                player.select(&letter.to_string());
            }
            _ => {}
        }

        if submit {
            self.submit_quiz(now);
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Enter => self.go_home(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Char('r') => {
                let topic = self.last_quiz_topic.clone();
                self.request_quiz(topic);
            }
            KeyCode::Char('a') => self.request_analytics(),
            _ => {}
        }
    }

    fn handle_analytics_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Enter => self.go_home(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('r') => self.request_analytics(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let Screen::VisualizerMenu { selected } = &mut self.screen else {
            return;
        };
        let count = VisualizerKind::ALL.len();
        let mut open = None;
        match key.code {
            KeyCode::Up => *selected = (*selected + count - 1) % count,
            KeyCode::Down | KeyCode::Tab => *selected = (*selected + 1) % count,
            KeyCode::Enter => open = Some(VisualizerKind::ALL[*selected]),
            KeyCode::Char(c @ '1'..='5') => {
                open = VisualizerKind::ALL.get(c as usize - '1' as usize).copied()
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.go_home(),
            _ => {}
        }
        if let Some(kind) = open {
            self.open_visualizer(kind, None);
        }
    }

    fn handle_visualizer_key(&mut self, key: KeyEvent, now: Instant) {
        let Screen::Visualizer { visualizer, input } = &mut self.screen else {
            return;
        };

        let mut prompt = None;
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::VisualizerMenu { selected: 0 };
                return;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => {
                visualizer.reset(now);
                input.clear();
            }
            KeyCode::Tab | KeyCode::BackTab => input.toggle_field(),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                input.push(c);
            }
            KeyCode::Char(c) => {
                if let Some(op) = controls::lookup(visualizer.kind(), c) {
                    debug!(?op, "visualizer command");
                    match controls::run(visualizer, op, input, now) {
                        Ok(()) if op.operand() != Operand::None => input.clear(),
                        Ok(()) => {}
                        Err(message) => prompt = Some(message),
                    }
                }
            }
            _ => {}
        }

        match prompt {
            Some(message) => self.set_error(message),
            None => self.clear_status(),
        }
    }

    // ─── Requests ────────────────────────────────────────────────

    fn start(&mut self, pending: Pending, request: Request) {
        self.pending = Some(pending);
        self.status_is_error = false;
        self.status_message = pending.label().to_string();
        self.pending_ticket = Some(self.worker.submit(request));
    }

    /// Ticket of the foreground request still being waited on
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.and(self.pending_ticket)
    }

    /// Submit a request whose reply only matters while the same learner is signed in
    fn submit_background(&mut self, request: Request) {
        let ticket = self.worker.submit(request);
        self.background.insert(ticket);
    }

    /// Refuse a second foreground request while one is running
    fn idle(&mut self) -> bool {
        if let Some(pending) = self.pending {
            self.set_status(format!("Still working: {}", pending.label()));
            return false;
        }
        true
    }

    fn require_topic(&mut self) -> Option<String> {
        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            self.set_error("Type a topic first (press t)");
            return None;
        }
        Some(topic)
    }

    fn learner(&self) -> Option<(String, Level, LearningStyle)> {
        self.profile.as_ref().map(|p| {
            (
                p.user.username.clone(),
                p.profile.proficiency_level,
                p.profile.learning_style,
            )
        })
    }

    fn refresh_profile(&mut self) {
        let Some((username, level, _)) = self.learner() else {
            return;
        };
        self.submit_background(Request::Greeting(GreetingRequest {
            student_name: username.clone(),
            level,
        }));
        self.submit_background(Request::RefreshProfile(username.clone()));
        self.submit_background(Request::LearningHistory {
            username,
            limit: self.config.history_limit,
        });
    }

    fn request_explanation(&mut self) {
        let Some((_, level, learning_style)) = self.learner() else {
            return;
        };
        if !self.idle() {
            return;
        }
        let Some(topic) = self.require_topic() else {
            return;
        };
        info!(%topic, "requesting explanation");
        self.start(
            Pending::Explanation,
            Request::Explain(TopicRequest {
                topic,
                level,
                learning_style,
            }),
        );
    }

    fn request_practice(&mut self) {
        let Some((_, level, _)) = self.learner() else {
            return;
        };
        if !self.idle() {
            return;
        }
        let Some(topic) = self.require_topic() else {
            return;
        };
        self.start(
            Pending::Practice,
            Request::Practice(PracticeRequest {
                topic,
                level,
                num_questions: self.quiz_length,
            }),
        );
    }

    fn request_quiz(&mut self, topic: String) {
        let Some((username, level, _)) = self.learner() else {
            return;
        };
        if topic.is_empty() || !self.idle() {
            return;
        }
        info!(%topic, questions = self.quiz_length, "requesting quiz");
        self.last_quiz_topic = topic.clone();
        self.start(
            Pending::Quiz,
            Request::GenerateQuiz(QuizGenerateRequest {
                username,
                topic,
                level,
                num_questions: self.quiz_length,
            }),
        );
    }

    fn submit_quiz(&mut self, now: Instant) {
        let Screen::Quiz(player) = &self.screen else {
            return;
        };
        let submission = player.submission(now);
        info!(
            quiz = %submission.quiz_session_id,
            answered = submission.answers.len(),
            seconds = submission.time_taken,
            "submitting quiz"
        );
        self.start(Pending::Grading, Request::SubmitQuiz(submission));
    }

    fn request_analytics(&mut self) {
        let Some((username, _, _)) = self.learner() else {
            return;
        };
        if !self.idle() {
            return;
        }
        self.start(
            Pending::Analytics,
            Request::QuizHistory {
                username,
                limit: self.config.history_limit,
            },
        );
    }

    fn change_level(&mut self) {
        let Some((username, level, _)) = self.learner() else {
            return;
        };
        let pos = Level::ALL.iter().position(|&l| l == level).unwrap_or(0);
        let next = Level::ALL[(pos + 1) % Level::ALL.len()];
        self.submit_background(Request::UpdateProfile {
            username,
            update: ProfileUpdate {
                proficiency_level: Some(next),
                ..Default::default()
            },
        });
        self.set_status(format!("Switching level to {}...", next));
    }

    fn change_style(&mut self) {
        let Some((username, _, style)) = self.learner() else {
            return;
        };
        let all = LearningStyle::ALL;
        let pos = all.iter().position(|&s| s == style).unwrap_or(0);
        let next = all[(pos + 1) % all.len()];
        self.submit_background(Request::UpdateProfile {
            username,
            update: ProfileUpdate {
                learning_style: Some(next),
                ..Default::default()
            },
        });
        self.set_status(format!("Switching learning style to {}...", next));
    }

    fn adjust_quiz_length(&mut self, delta: i8) {
        self.quiz_length = self
            .quiz_length
            .saturating_add_signed(delta)
            .clamp(*QUIZ_QUESTIONS_RANGE.start(), *QUIZ_QUESTIONS_RANGE.end());
        self.set_status(format!("Quizzes will have {} questions", self.quiz_length));
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.pending_ticket = None;
            debug!(?pending, "cancelled");
            self.set_status("Cancelled");
        }
    }

    fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "could not clear session");
        }
        info!("logged out");
        self.profile = None;
        self.greeting = None;
        self.recent.clear();
        self.topic.clear();
        self.pending = None;
        self.pending_ticket = None;
        self.background.clear();
        self.screen = Screen::ProfileSetup(ProfileDraft::default());
        self.set_status("Signed out");
    }

    fn go_home(&mut self) {
        self.scroll = 0;
        self.pending = None;
        self.pending_ticket = None;
        self.screen = if self.profile.is_some() {
            Screen::Dashboard
        } else {
            Screen::ProfileSetup(ProfileDraft::default())
        };
    }

    // ─── Outcomes ────────────────────────────────────────────────

    /// Apply a finished backend request, unless nothing is waiting for its ticket
    pub fn handle_reply(&mut self, reply: Reply, now: Instant) {
        let Reply { ticket, outcome } = reply;
        match outcome {
            Outcome::Health(Ok(health)) => debug!(status = %health.status, "backend reachable"),
            Outcome::Health(Err(e)) => {
                warn!(error = %e, "health check failed");
                self.set_error(format!("Backend unreachable: {}", e));
            }
            Outcome::Profile(result) => self.on_profile(ticket, result),
            Outcome::ProfileUpdated(_)
            | Outcome::LearningHistory(_)
            | Outcome::Greeting(_)
                if !self.background.remove(&ticket) =>
            {
                debug!(ticket, "dropping response for a previous learner");
            }
            Outcome::ProfileUpdated(Ok(updated)) => {
                if let Some(full) = &mut self.profile {
                    full.profile = updated;
                    self.persist();
                }
                self.set_status("Profile updated");
                if let Some((student_name, level, _)) = self.learner() {
                    self.submit_background(Request::Greeting(GreetingRequest {
                        student_name,
                        level,
                    }));
                }
            }
            Outcome::ProfileUpdated(Err(e)) => {
                self.set_error(format!("Could not update profile: {}", e))
            }
            Outcome::LearningHistory(Ok(sessions)) => self.recent = sessions,
            Outcome::LearningHistory(Err(e)) => warn!(error = %e, "learning history unavailable"),
            Outcome::Greeting(Ok(greeting)) => self.greeting = Some(greeting.greeting),
            Outcome::Greeting(Err(e)) => {
                warn!(error = %e, "greeting unavailable");
                self.greeting = None;
            }
            Outcome::Explanation(result) => {
                if self.take_pending(Pending::Explanation, ticket) {
                    match result {
                        Ok(explanation) => {
                            self.scroll = 0;
                            self.set_status(format!(
                                "{} words, about {} min read",
                                explanation.word_count, explanation.estimated_reading_time
                            ));
                            self.screen = Screen::Explanation(explanation);
                        }
                        Err(e) => self.set_error(format!("Could not explain topic: {}", e)),
                    }
                }
            }
            Outcome::Practice(result) => {
                if self.take_pending(Pending::Practice, ticket) {
                    match result {
                        Ok(practice) => {
                            self.scroll = 0;
                            self.clear_status();
                            self.screen = Screen::Practice(practice);
                        }
                        Err(e) => {
                            self.set_error(format!("Could not generate practice questions: {}", e))
                        }
                    }
                }
            }
            Outcome::Quiz(result) => {
                if self.take_pending(Pending::Quiz, ticket) {
                    match result {
                        Ok(session) if session.questions.is_empty() => {
                            self.set_error("The quiz came back without questions")
                        }
                        Ok(session) => {
                            info!(quiz = %session.id, questions = session.questions.len(), "quiz started");
                            let limit = Duration::from_secs(self.config.quiz.time_limit_secs);
                            self.auto_submitted = false;
                            self.clear_status();
                            self.screen = Screen::Quiz(QuizPlayer::new(session, limit, now));
                        }
                        Err(e) => self.set_error(format!("Could not generate quiz: {}", e)),
                    }
                }
            }
            Outcome::Results(result) => {
                if self.take_pending(Pending::Grading, ticket) {
                    match result {
                        Ok(results) => {
                            info!(score = results.score, "quiz graded");
                            self.scroll = 0;
                            self.clear_status();
                            self.screen = Screen::Results(results);
                        }
                        Err(e) => self.set_error(format!(
                            "Could not submit quiz: {} (press s to retry)",
                            e
                        )),
                    }
                }
            }
            Outcome::QuizHistory(result) => {
                if self.take_pending(Pending::Analytics, ticket) {
                    match result {
                        Ok(history) => {
                            self.scroll = 0;
                            self.clear_status();
                            self.screen = Screen::Analytics(Analytics::from_history(history));
                        }
                        Err(e) => self.set_error(format!("Could not load analytics: {}", e)),
                    }
                }
            }
        }
    }

    fn on_profile(&mut self, ticket: Ticket, result: Result<FullProfile, ApiError>) {
        let refreshing = self.background.remove(&ticket);
        let creating = !refreshing && self.take_pending(Pending::Profile, ticket);
        if !creating && !refreshing {
            return;
        }
        match result {
            Ok(profile) => {
                let name = profile.user.username.clone();
                let same_user = self
                    .profile
                    .as_ref()
                    .is_some_and(|p| p.user.username == name);
                if !creating && !same_user {
                    debug!("dropping profile for another user");
                    return;
                }
                self.recent = profile.recent_sessions.clone();
                self.profile = Some(profile);
                self.persist();
                if creating {
                    info!(username = %name, "profile created");
                    self.screen = Screen::Dashboard;
                    self.set_status(format!("Welcome, {}!", name));
                    self.refresh_profile();
                }
            }
            Err(e) if creating => {
                self.set_error(format!("Could not create profile: {}", e));
            }
            Err(e) => warn!(error = %e, "profile refresh failed"),
        }
    }

    /// Whether the reply under `ticket` is the `expected` request still being waited on
    fn take_pending(&mut self, expected: Pending, ticket: Ticket) -> bool {
        if self.pending == Some(expected) && self.pending_ticket == Some(ticket) {
            self.pending = None;
            self.pending_ticket = None;
            true
        } else {
            debug!(?expected, ticket, "dropping stale response");
            false
        }
    }

    fn persist(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        if let Err(e) = self.session.save(profile) {
            warn!(error = %e, "could not save session");
            self.set_error(format!("Could not save session: {}", e));
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_is_error = false;
    }
}
