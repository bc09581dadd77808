//! Visualizer picker and the frame around an open widget

use super::sequence::{render_array, render_linked_list, render_queue, render_stack};
use super::tree::render_tree;
use super::utils::{centered, titled_block};
use crate::ui::controls::{bindings, OperandField, OperandInput};
use crate::ui::theme::DEFAULT_THEME;
use crate::visualizers::{Visualizer, VisualizerKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub fn render_visualizer_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Pick a data structure to explore",
            Style::default().fg(DEFAULT_THEME.muted),
        )),
        Line::default(),
    ];
    for (i, kind) in VisualizerKind::ALL.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let marker = if i == selected { "▶" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {} ", marker, i + 1, kind.title()),
            style,
        )));
    }

    let boxed = centered(area, 48, lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("🔍 Data Structure Visualizers", true)),
        boxed,
    );
}

pub fn render_visualizer(
    frame: &mut Frame,
    area: Rect,
    visualizer: &mut Visualizer,
    input: &OperandInput,
    now: Instant,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(6),
        ])
        .split(area);

    let kind = visualizer.kind();
    let message = visualizer.message(now).map(str::to_string);

    match visualizer {
        Visualizer::Tree(v) => render_tree(frame, rows[0], v, now),
        Visualizer::Array(v) => render_array(frame, rows[0], v, now),
        Visualizer::Stack(v) => render_stack(frame, rows[0], v, now),
        Visualizer::Queue(v) => render_queue(frame, rows[0], v, now),
        Visualizer::LinkedList(v) => render_linked_list(frame, rows[0], v, now),
    }

    let message_line = match message {
        Some(text) => Line::from(Span::styled(
            text,
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Ready",
            Style::default().fg(DEFAULT_THEME.muted),
        )),
    };
    frame.render_widget(
        Paragraph::new(message_line).block(titled_block("Status", false)),
        rows[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[2]);
    render_controls(frame, columns[0], kind, input);
    render_complexity(frame, columns[1], kind);
}

fn operand_span(label: &str, text: &str, active: bool) -> Vec<Span<'static>> {
    let style = if active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let shown = if text.is_empty() { "_" } else { text };
    vec![
        Span::styled(format!("{}: ", label), Style::default().fg(DEFAULT_THEME.muted)),
        Span::styled(format!("[{:<8}]", shown), style),
        Span::raw("  "),
    ]
}

fn render_controls(frame: &mut Frame, area: Rect, kind: VisualizerKind, input: &OperandInput) {
    let mut fields = operand_span("Value", &input.value, input.field == OperandField::Value);
    if kind == VisualizerKind::Array {
        fields.extend(operand_span(
            "Index",
            &input.index,
            input.field == OperandField::Index,
        ));
        fields.push(Span::styled(
            "Tab switches",
            Style::default().fg(DEFAULT_THEME.muted),
        ));
    }

    let mut keys = Vec::new();
    for binding in bindings(kind) {
        keys.push(Span::styled(
            binding.key.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        keys.push(Span::styled(
            format!(" {}  ", binding.label),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    keys.push(Span::styled(
        "r",
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ));
    keys.push(Span::styled(" reset", Style::default().fg(DEFAULT_THEME.fg)));

    frame.render_widget(
        Paragraph::new(vec![Line::from(fields), Line::default(), Line::from(keys)])
            .block(titled_block("Controls", true))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_complexity(frame: &mut Frame, area: Rect, kind: VisualizerKind) {
    let lines: Vec<Line> = kind
        .complexity()
        .iter()
        .map(|(op, cost)| {
            Line::from(vec![
                Span::styled(format!("{}: ", op), Style::default().fg(DEFAULT_THEME.muted)),
                Span::styled(*cost, Style::default().fg(DEFAULT_THEME.info)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Complexity", false)),
        area,
    );
}
