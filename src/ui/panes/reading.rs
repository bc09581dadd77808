//! Long-form text panes: topic explanations and practice questions
//!
//! The backend answers in Markdown. Headings, bullets and fenced code get a
//! colour; everything else is shown as-is.

use super::utils::{clamp_scroll, field_line, titled_block, wrapped_height};
use crate::api::types::{PracticeResponse, TopicResponse};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_explanation(
    frame: &mut Frame,
    area: Rect,
    explanation: &TopicResponse,
    scroll: &mut u16,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let meta = Line::from(vec![
        field_line("Level", explanation.level.clone()).spans,
        vec![Span::raw("   ")],
        field_line("Reading time", format!("{} min", explanation.estimated_reading_time)).spans,
        vec![Span::raw("   ")],
        field_line("Model", explanation.model_used.clone()).spans,
    ]
    .concat());
    frame.render_widget(
        Paragraph::new(meta).block(titled_block(&format!("📖 {}", explanation.topic), false)),
        rows[0],
    );

    render_markdown(frame, rows[1], "Explanation", &explanation.explanation, scroll);
}

pub fn render_practice(frame: &mut Frame, area: Rect, practice: &PracticeResponse, scroll: &mut u16) {
    let title = format!(
        "✏️ Practice: {} ({}, {} questions)",
        practice.topic, practice.level, practice.count
    );
    render_markdown(frame, area, &title, &practice.questions, scroll);
}

fn render_markdown(frame: &mut Frame, area: Rect, title: &str, text: &str, scroll: &mut u16) {
    let lines = markdown_lines(text);
    // borders plus horizontal padding
    let inner_width = area.width.saturating_sub(4);
    let inner_height = area.height.saturating_sub(2);
    clamp_scroll(scroll, wrapped_height(&lines, inner_width), inner_height);

    let paragraph = Paragraph::new(lines)
        .block(titled_block(title, true))
        .wrap(Wrap { trim: false })
        .scroll((*scroll, 0));
    frame.render_widget(paragraph, area);
}

fn markdown_lines(text: &str) -> Vec<Line<'_>> {
    let mut in_code = false;
    text.lines()
        .map(|raw| {
            let trimmed = raw.trim_start();
            if trimmed.starts_with("```") {
                in_code = !in_code;
                return Line::from(Span::styled(raw, Style::default().fg(DEFAULT_THEME.muted)));
            }
            if in_code {
                return Line::from(Span::styled(raw, Style::default().fg(DEFAULT_THEME.info)));
            }
            if trimmed.starts_with('#') {
                let heading = trimmed.trim_start_matches('#').trim();
                return Line::from(Span::styled(
                    heading,
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                return Line::from(vec![
                    Span::styled("  • ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Span::styled(item, Style::default().fg(DEFAULT_THEME.fg)),
                ]);
            }
            Line::from(Span::styled(raw, Style::default().fg(DEFAULT_THEME.fg)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_styling() {
        let lines = markdown_lines("## Stacks\n- push\n```\ncode - here\n```\nplain");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].spans[0].content, "Stacks");
        assert_eq!(lines[1].spans[0].content, "  • ");
        // inside a fence bullets are left alone
        assert_eq!(lines[3].spans.len(), 1);
        assert_eq!(lines[3].spans[0].style.fg, Some(DEFAULT_THEME.info));
    }
}
