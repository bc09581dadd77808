//! Quiz player pane

use super::utils::{bar, titled_block};
use crate::api::types::Difficulty;
use crate::learning::format_clock;
use crate::learning::quiz::QuizPlayer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Remaining seconds below which the clock turns red
const CLOCK_WARNING_SECS: u64 = 60;

pub fn render_quiz(frame: &mut Frame, area: Rect, player: &QuizPlayer, now: Instant, grading: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_header(frame, rows[0], player, now);

    let Some(question) = player.question() else {
        return;
    };
    let chosen = player.answer(player.position());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} ", player.position() + 1),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            difficulty_badge(question.difficulty),
        ]),
        Line::default(),
        Line::from(Span::styled(
            question.question_text.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
    ];
    for (letter, text) in &question.options {
        let selected = chosen == Some(letter.as_str());
        let style = if selected {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let marker = if selected { "●" } else { "○" };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {} ", marker, letter, text),
            style,
        )));
        lines.push(Line::default());
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block(&player.session().topic, true))
            .wrap(Wrap { trim: false }),
        rows[1],
    );

    let footer = if grading {
        Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(DEFAULT_THEME.secondary),
        ))
    } else if player.is_last() {
        Line::from(Span::styled(
            "Last question: press ↵ or s to submit",
            Style::default().fg(DEFAULT_THEME.success),
        ))
    } else {
        Line::from(Span::styled(
            "↵ or → for the next question",
            Style::default().fg(DEFAULT_THEME.muted),
        ))
    };
    frame.render_widget(Paragraph::new(footer).block(titled_block("", false)), rows[2]);
}

fn render_header(frame: &mut Frame, area: Rect, player: &QuizPlayer, now: Instant) {
    let left = player.time_left(now).as_secs();
    let clock_color = if left < CLOCK_WARNING_SECS {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.success
    };
    let width = usize::from(area.width.saturating_sub(30)).max(10);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} of {}", player.position() + 1, player.len()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("   answered {}   ", player.answered()),
                Style::default().fg(DEFAULT_THEME.muted),
            ),
            Span::styled(
                format!("⏱ {}", format_clock(left)),
                Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            bar(width, player.progress()),
            Style::default().fg(DEFAULT_THEME.primary),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("📝 Quiz", false)),
        area,
    );
}

pub(super) fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => DEFAULT_THEME.success,
        Difficulty::Medium => DEFAULT_THEME.warning,
        Difficulty::Hard => DEFAULT_THEME.error,
        Difficulty::Other => DEFAULT_THEME.muted,
    }
}

pub(super) fn difficulty_badge(difficulty: Difficulty) -> Span<'static> {
    Span::styled(
        format!(" {} ", difficulty.label().to_uppercase()),
        Style::default()
            .bg(difficulty_color(difficulty))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}
