//! Quiz results pane

use super::quiz::{difficulty_badge, difficulty_color};
use super::utils::{bar, clamp_scroll, titled_block, wrapped_height};
use crate::api::types::{QuestionResult, QuizResults};
use crate::learning::format_clock;
use crate::learning::results::{breakdown, ScoreBand};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_results(frame: &mut Frame, area: Rect, results: &QuizResults, scroll: &mut u16) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(area);

    render_summary(frame, columns[0], results);

    let lines: Vec<Line> = results.questions.iter().flat_map(review_lines).collect();
    let inner_width = columns[1].width.saturating_sub(4);
    let inner_height = columns[1].height.saturating_sub(2);
    clamp_scroll(scroll, wrapped_height(&lines, inner_width), inner_height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block("Answer Review", true))
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0)),
        columns[1],
    );
}

fn render_summary(frame: &mut Frame, area: Rect, results: &QuizResults) {
    let band = ScoreBand::for_score(results.score);
    let score_color = DEFAULT_THEME.score_color(results.score);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", band.emoji(), band.headline()),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{:.0}%", results.score),
            Style::default().fg(score_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} / {} correct",
            results.correct_answers, results.total_questions
        )),
        Line::from(Span::styled(
            format!("⏱ {}", format_clock(results.time_taken)),
            Style::default().fg(DEFAULT_THEME.muted),
        )),
        Line::from(if results.passed {
            Span::styled("PASSED", Style::default().fg(DEFAULT_THEME.success))
        } else {
            Span::styled("NOT PASSED", Style::default().fg(DEFAULT_THEME.error))
        }),
        Line::default(),
    ];

    for row in breakdown(results) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<7}", row.difficulty.label()),
                Style::default().fg(difficulty_color(row.difficulty)),
            ),
            Span::styled(
                bar(16, row.percent()),
                Style::default().fg(difficulty_color(row.difficulty)),
            ),
            Span::raw(format!(" {}/{}", row.correct, row.total)),
        ]));
    }

    if !results.feedback.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            results.feedback.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block(&format!("Results: {}", results.topic), false))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn review_lines(question: &QuestionResult) -> Vec<Line<'_>> {
    let (mark, color) = if question.is_correct {
        ("✓", DEFAULT_THEME.success)
    } else {
        ("✗", DEFAULT_THEME.error)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} Q{} ", mark, question.question_number),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        difficulty_badge(question.difficulty),
        Span::raw(" "),
        Span::styled(
            question.question_text.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])];

    for (letter, text) in &question.options {
        let is_answer = *letter == question.correct_answer;
        let is_choice = question.user_answer.as_deref() == Some(letter.as_str());
        let style = if is_answer {
            Style::default().fg(DEFAULT_THEME.success)
        } else if is_choice {
            Style::default().fg(DEFAULT_THEME.error)
        } else {
            Style::default().fg(DEFAULT_THEME.muted)
        };
        let tag = match (is_answer, is_choice) {
            (true, true) => "  ← your answer",
            (true, false) => "  ← correct",
            (false, true) => "  ← your answer",
            (false, false) => "",
        };
        lines.push(Line::from(Span::styled(
            format!("    {}. {}{}", letter, text, tag),
            style,
        )));
    }

    if question.user_answer.is_none() {
        lines.push(Line::from(Span::styled(
            "    (not answered)",
            Style::default().fg(DEFAULT_THEME.warning),
        )));
    }
    if !question.explanation.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    💡 {}", question.explanation),
            Style::default().fg(DEFAULT_THEME.info),
        )));
    }
    lines.push(Line::default());
    lines
}
