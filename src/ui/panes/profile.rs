//! Sign-up wizard pane

use super::utils::{centered, titled_block};
use crate::api::types::{LearningStyle, Level};
use crate::learning::profile::{DraftField, ProfileDraft, SetupStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const STEPS: [SetupStep; 3] = [SetupStep::BasicInfo, SetupStep::Level, SetupStep::Style];

pub fn render_profile_setup(frame: &mut Frame, area: Rect, draft: &ProfileDraft) {
    let area = centered(area, 64, 20);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome! Let's set up your learning profile",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        progress_line(draft.step),
        Line::default(),
    ];

    match draft.step {
        SetupStep::BasicInfo => {
            lines.push(input_line("Username", &draft.username, draft.field == DraftField::Username));
            lines.push(input_line("Email", &draft.email, draft.field == DraftField::Email));
            lines.push(input_line("Topics", &draft.topics, draft.field == DraftField::Topics));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Topics are optional, separate them with commas",
                Style::default().fg(DEFAULT_THEME.muted),
            )));
        }
        SetupStep::Level => {
            lines.push(Line::from("What's your current level?"));
            lines.push(Line::default());
            for level in Level::ALL {
                lines.push(choice_line(
                    &capitalize(level.as_str()),
                    level.blurb(),
                    level == draft.level,
                ));
            }
        }
        SetupStep::Style => {
            lines.push(Line::from("How do you learn best?"));
            lines.push(Line::default());
            for style in LearningStyle::ALL {
                lines.push(choice_line(
                    &capitalize(style.as_str()),
                    style.blurb(),
                    style == draft.style,
                ));
            }
        }
    }

    let title = format!("Step {} of 3: {}", draft.step.number(), draft.step.label());
    let paragraph = Paragraph::new(lines)
        .block(titled_block(&title, true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn progress_line(current: SetupStep) -> Line<'static> {
    let spans: Vec<Span> = STEPS
        .iter()
        .map(|&step| {
            let style = if step.number() <= current.number() {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.muted)
            };
            Span::styled(format!("━━━━ {} ", step.label()), style)
        })
        .collect();
    Line::from(spans)
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.muted)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:>10} ", label), label_style),
        Span::styled(
            format!("[{}{}]", value, cursor),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}

fn choice_line(name: &str, blurb: &str, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        (
            "▶ ",
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(DEFAULT_THEME.fg))
    };
    Line::from(vec![
        Span::styled(format!("{}{:<14}", marker, name), style),
        Span::styled(blurb.to_string(), Style::default().fg(DEFAULT_THEME.muted)),
    ])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
