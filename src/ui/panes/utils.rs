//! Shared helpers for pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

/// Bordered block with the app's title styling
pub(super) fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

/// A `width` x `height` box centred in `area`, shrunk to fit
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Text progress bar, e.g. `████░░░░`
pub(super) fn bar(width: usize, percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

/// `label: value` line with a dimmed label
pub(super) fn field_line<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(DEFAULT_THEME.muted)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Rows `lines` take up once wrapped at `width`
pub(super) fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum()
}

/// Keep `scroll` within the content
pub(super) fn clamp_scroll(scroll: &mut u16, content_rows: usize, visible_rows: u16) {
    let max = content_rows.saturating_sub(usize::from(visible_rows));
    *scroll = (*scroll).min(u16::try_from(max).unwrap_or(u16::MAX));
}
