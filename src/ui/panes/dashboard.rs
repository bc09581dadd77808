//! Dashboard pane: greeting, learner summary, topic entry, recent sessions

use super::utils::{field_line, titled_block};
use crate::api::types::{FullProfile, LearningSession};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

pub struct DashboardRenderData<'a> {
    pub profile: Option<&'a FullProfile>,
    pub greeting: Option<&'a str>,
    pub recent: &'a [LearningSession],
    pub topic: &'a str,
    pub editing_topic: bool,
    pub quiz_length: u8,
}

const ACTIONS: [(&str, &str); 9] = [
    ("e", "Explain the topic"),
    ("p", "Practice questions"),
    ("z", "Take a quiz"),
    ("[ ]", "Quiz length"),
    ("a", "Progress analytics"),
    ("v", "Data structure visualizers"),
    ("l / s", "Change level / learning style"),
    ("r", "Refresh profile"),
    ("x", "Sign out"),
];

pub fn render_dashboard(frame: &mut Frame, area: Rect, data: &DashboardRenderData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_greeting(frame, rows[0], data);
    render_topic(frame, rows[1], data);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_actions(frame, columns[0], data.quiz_length);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(columns[1]);
    render_profile(frame, right[0], data.profile);
    render_recent(frame, right[1], data.recent);
}

fn render_greeting(frame: &mut Frame, area: Rect, data: &DashboardRenderData) {
    let name = data.profile.map(|p| p.user.username.as_str()).unwrap_or("there");
    let text = match data.greeting {
        Some(greeting) => greeting.to_string(),
        None => format!("Welcome back, {}! What would you like to learn today?", name),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(DEFAULT_THEME.fg),
    )))
    .block(titled_block(&format!("👋 Hi, {}", name), false))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_topic(frame: &mut Frame, area: Rect, data: &DashboardRenderData) {
    let line = if data.topic.is_empty() && !data.editing_topic {
        Line::from(Span::styled(
            "Press t and type a topic, e.g. binary search trees",
            Style::default().fg(DEFAULT_THEME.muted),
        ))
    } else {
        let cursor = if data.editing_topic { "▏" } else { "" };
        Line::from(Span::styled(
            format!("{}{}", data.topic, cursor),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(line).block(titled_block("📚 Topic", data.editing_topic)),
        area,
    );
}

fn render_actions(frame: &mut Frame, area: Rect, quiz_length: u8) {
    let items: Vec<ListItem> = ACTIONS
        .iter()
        .map(|(key, label)| {
            let detail = if *key == "[ ]" {
                format!("{} ({} questions)", label, quiz_length)
            } else {
                label.to_string()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:^7} ", key),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(detail, Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(titled_block("Actions", false)), area);
}

fn render_profile(frame: &mut Frame, area: Rect, profile: Option<&FullProfile>) {
    let lines = match profile {
        Some(p) => vec![
            field_line("Level", p.profile.proficiency_level.to_string()),
            field_line("Style", p.profile.learning_style.to_string()),
            field_line("Sessions", p.profile.total_sessions.clone()),
            field_line("Topics studied", p.total_topics_studied.to_string()),
            field_line(
                "Member since",
                p.user.created_at.format("%Y-%m-%d").to_string(),
            ),
        ],
        None => vec![Line::from("Not signed in")],
    };
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Profile", false)),
        area,
    );
}

fn render_recent(frame: &mut Frame, area: Rect, recent: &[LearningSession]) {
    let block = titled_block("Recent Sessions", false);
    if recent.is_empty() {
        frame.render_widget(
            Paragraph::new("(nothing yet)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.muted)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = recent
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", s.created_at.format("%m-%d")),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(s.topic.clone(), Style::default().fg(DEFAULT_THEME.info)),
                Span::styled(
                    format!("  {} · {} min", s.level, s.estimated_reading_time),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
