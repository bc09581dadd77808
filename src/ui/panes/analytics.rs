//! Progress analytics pane

use super::quiz::difficulty_color;
use super::utils::{bar, titled_block};
use crate::learning::analytics::{insights, Analytics};
use crate::learning::format_clock;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_analytics(frame: &mut Frame, area: Rect, analytics: &Analytics, scroll: &mut u16) {
    if analytics.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from("No quizzes yet."),
                Line::from(Span::styled(
                    "Take a quiz from the dashboard to start tracking your progress.",
                    Style::default().fg(DEFAULT_THEME.muted),
                )),
            ])
            .block(titled_block("📊 Learning Analytics", true)),
            area,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Min(6),
        ])
        .split(area);

    render_stats(frame, rows[0], analytics);
    render_chart(frame, rows[1], analytics);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);
    render_breakdowns(frame, bottom[0], analytics);
    render_table(frame, bottom[1], analytics, scroll);
}

fn render_stats(frame: &mut Frame, area: Rect, analytics: &Analytics) {
    let stats = &analytics.stats;
    let label = Style::default().fg(DEFAULT_THEME.muted);
    let value = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let sign = if stats.improvement_rate > 0 { "+" } else { "" };

    let line = Line::from(vec![
        Span::styled("Quizzes ", label),
        Span::styled(stats.total_quizzes.to_string(), value(DEFAULT_THEME.primary)),
        Span::styled("   Average ", label),
        Span::styled(format!("{}%", stats.average_score), value(DEFAULT_THEME.success)),
        Span::styled("   Topics ", label),
        Span::styled(stats.total_topics.to_string(), value(DEFAULT_THEME.info)),
        Span::styled("   Best ", label),
        Span::styled(format!("{}%", stats.best_score), value(DEFAULT_THEME.warning)),
        Span::styled("   Improvement ", label),
        Span::styled(
            format!("{}{}%", sign, stats.improvement_rate),
            value(DEFAULT_THEME.accent),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(titled_block("📊 Learning Analytics", true)),
        area,
    );
}

fn render_chart(frame: &mut Frame, area: Rect, analytics: &Analytics) {
    let points: Vec<(f64, f64)> = analytics
        .timeline
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1) as f64, p.score as f64))
        .collect();
    let x_max = points.len().max(2) as f64;

    let dataset = Dataset::default()
        .name("Score %")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(DEFAULT_THEME.primary))
        .data(&points);

    let first = analytics
        .timeline
        .first()
        .map(|p| p.label.clone())
        .unwrap_or_default();
    let last = analytics
        .timeline
        .last()
        .map(|p| p.label.clone())
        .unwrap_or_default();

    let chart = Chart::new(vec![dataset])
        .block(titled_block("📈 Score Progression", false))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(DEFAULT_THEME.muted))
                .bounds([1.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(DEFAULT_THEME.muted))
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );
    frame.render_widget(chart, area);
}

fn render_breakdowns(frame: &mut Frame, area: Rect, analytics: &Analytics) {
    let mut lines = vec![Line::from(Span::styled(
        "By topic",
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))];
    for topic in &analytics.topics {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16.16} ", topic.topic),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                bar(12, topic.average as f64),
                Style::default().fg(DEFAULT_THEME.score_color(topic.average as f64)),
            ),
            Span::raw(format!(" {}%", topic.average)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "By difficulty",
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )));
    for entry in &analytics.difficulties {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16} ", entry.difficulty.label()),
                Style::default().fg(difficulty_color(entry.difficulty)),
            ),
            Span::styled(
                bar(12, entry.score as f64),
                Style::default().fg(difficulty_color(entry.difficulty)),
            ),
            Span::raw(format!(" {}%", entry.score)),
        ]));
    }

    let tips = insights(&analytics.stats);
    if !tips.is_empty() {
        lines.push(Line::default());
        for tip in tips {
            lines.push(Line::from(Span::styled(
                format!("💡 {}", tip),
                Style::default().fg(DEFAULT_THEME.info),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block("Performance", false))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_table(frame: &mut Frame, area: Rect, analytics: &Analytics, scroll: &mut u16) {
    // newest first, like the history endpoint
    let rows: Vec<Row> = analytics
        .quizzes
        .iter()
        .rev()
        .map(|q| {
            Row::new(vec![
                q.topic.clone(),
                format!("{:.0}%", q.score),
                format!("{}/{}", q.correct_answers, q.total_questions),
                q.time_taken.map(format_clock).unwrap_or_else(|| "-".into()),
                q.completed_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".into()),
            ])
            .style(Style::default().fg(DEFAULT_THEME.score_color(q.score)))
        })
        .collect();

    // header, borders
    let visible = usize::from(area.height.saturating_sub(3));
    let max_scroll = rows.len().saturating_sub(visible);
    *scroll = (*scroll).min(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    let rows: Vec<Row> = rows.into_iter().skip(usize::from(*scroll)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Topic", "Score", "Correct", "Time", "Date"]).style(
            Style::default()
                .fg(DEFAULT_THEME.muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(titled_block("Recent Quizzes", false));
    frame.render_widget(table, area);
}
