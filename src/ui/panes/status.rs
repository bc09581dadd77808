//! Status bar rendering with key hints and the busy indicator

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    /// Label of the request being waited on
    pub loading: Option<&'a str>,
    /// `(key, action)` pairs for the current screen
    pub hints: &'a [(&'static str, &'static str)],
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.bar_bg);

    // Left side: app badge and message
    let badge_bg = if data.is_error {
        DEFAULT_THEME.error
    } else if data.loading.is_some() {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };
    let message = data.loading.unwrap_or(data.message);

    let left_spans = vec![
        Span::styled(
            " tutortty ",
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            bar_style.fg(if data.is_error && data.loading.is_none() {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: key hints
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.muted);

    let mut right_spans = Vec::new();
    for (i, (key, action)) in data.hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", action), desc_style));
    }

    if data.loading.is_some() {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ⏳ WAITING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}
