//! Box-drawing renderers for the linear widgets (array, stack, queue, list)

use super::utils::titled_block;
use crate::animation::Mark;
use crate::ui::theme::DEFAULT_THEME;
use crate::visualizers::array::ArrayVisualizer;
use crate::visualizers::{LinkedListVisualizer, QueueVisualizer, StackVisualizer};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Inner width of a value box
const CELL_WIDTH: usize = 8;

/// One box plus the two caption rows printed under it
struct Cell {
    text: String,
    captions: [String; 2],
    highlighted: bool,
}

fn cell_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.warning)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    }
}

fn centre(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Lay `cells` out left to right, wrapping onto more rows when they do not
/// fit in `width` columns. `connector` sits between neighbouring boxes.
fn cell_rows(cells: &[Cell], connector: &str, width: u16) -> Vec<Line<'static>> {
    let box_width = CELL_WIDTH + 2;
    let gap = connector.chars().count();
    let per_row = ((usize::from(width) + gap) / (box_width + gap)).max(1);
    let caption_style = Style::default().fg(DEFAULT_THEME.muted);
    let connector_style = Style::default().fg(DEFAULT_THEME.secondary);

    let mut lines = Vec::new();
    for row in cells.chunks(per_row) {
        let mut top = Vec::new();
        let mut middle = Vec::new();
        let mut bottom = Vec::new();
        let mut captions: [Vec<Span>; 2] = [Vec::new(), Vec::new()];

        for (i, cell) in row.iter().enumerate() {
            let style = cell_style(cell.highlighted);
            if i > 0 {
                top.push(Span::raw(" ".repeat(gap)));
                middle.push(Span::styled(connector.to_string(), connector_style));
                bottom.push(Span::raw(" ".repeat(gap)));
                for caption in captions.iter_mut() {
                    caption.push(Span::raw(" ".repeat(gap)));
                }
            }
            top.push(Span::styled(format!("┌{}┐", "─".repeat(CELL_WIDTH)), style));
            middle.push(Span::styled(
                format!("│{}│", centre(&cell.text, CELL_WIDTH)),
                style,
            ));
            bottom.push(Span::styled(format!("└{}┘", "─".repeat(CELL_WIDTH)), style));
            for (slot, text) in captions.iter_mut().zip(&cell.captions) {
                slot.push(Span::styled(centre(text, box_width), caption_style));
            }
        }

        lines.push(Line::from(top));
        lines.push(Line::from(middle));
        lines.push(Line::from(bottom));
        let [first, second] = captions;
        lines.push(Line::from(first));
        lines.push(Line::from(second));
        lines.push(Line::default());
    }
    lines
}

fn render_lines(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block(title, true))
            .alignment(Alignment::Left),
        area,
    );
}

fn empty_line(text: &'static str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text,
        Style::default().fg(DEFAULT_THEME.muted),
    ))]
}

pub fn render_array(frame: &mut Frame, area: Rect, array: &ArrayVisualizer, now: Instant) {
    let highlighted = array.highlighted(now);
    let cells: Vec<Cell> = array
        .values()
        .iter()
        .enumerate()
        .map(|(i, value)| Cell {
            text: value.to_string(),
            captions: [
                format!("[{}]", i),
                format!("0x{:x}", ArrayVisualizer::address(i)),
            ],
            highlighted: highlighted == Some(i),
        })
        .collect();

    let lines = if cells.is_empty() {
        empty_line("(empty array)")
    } else {
        cell_rows(&cells, " ", area.width.saturating_sub(4))
    };
    let title = format!("Array  length {}", array.values().len());
    render_lines(frame, area, &title, lines);
}

pub fn render_stack(frame: &mut Frame, area: Rect, stack: &StackVisualizer, now: Instant) {
    let top_highlighted = stack.top_highlighted(now);
    let items = stack.items();

    let mut lines = if items.is_empty() {
        empty_line("(empty stack)")
    } else {
        Vec::new()
    };
    // drawn top-down: last pushed first
    for (depth, value) in items.iter().rev().enumerate() {
        let is_top = depth == 0;
        let style = cell_style(is_top && top_highlighted);
        let border = format!("├{}┤", "─".repeat(CELL_WIDTH + 4));
        if depth == 0 {
            lines.push(Line::from(Span::styled(
                format!("┌{}┐", "─".repeat(CELL_WIDTH + 4)),
                style,
            )));
        }
        let mut row = vec![Span::styled(
            format!("│{}│", centre(&value.to_string(), CELL_WIDTH + 4)),
            style,
        )];
        if is_top {
            row.push(Span::styled(
                " ← TOP",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(row));
        if depth + 1 < items.len() {
            lines.push(Line::from(Span::styled(
                border,
                Style::default().fg(DEFAULT_THEME.primary),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("└{}┘", "─".repeat(CELL_WIDTH + 4)),
                Style::default().fg(DEFAULT_THEME.primary),
            )));
        }
    }

    let title = format!("Stack  size {}", items.len());
    render_lines(frame, area, &title, lines);
}

pub fn render_queue(frame: &mut Frame, area: Rect, queue: &QueueVisualizer, now: Instant) {
    let mark = queue.mark(now);
    let items = queue.items();
    let last = items.len().saturating_sub(1);

    let cells: Vec<Cell> = items
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let front = i == 0;
            let rear = i == last;
            let label = match (front, rear) {
                (true, true) => "FRONT/REAR",
                (true, false) => "FRONT",
                (false, true) => "REAR",
                (false, false) => "",
            };
            Cell {
                text: value.to_string(),
                captions: [label.to_string(), String::new()],
                highlighted: (front && mark == Some(Mark::Front))
                    || (rear && mark == Some(Mark::Rear)),
            }
        })
        .collect();

    let lines = if cells.is_empty() {
        empty_line("(empty queue)")
    } else {
        cell_rows(&cells, " ← ", area.width.saturating_sub(4))
    };
    let title = format!("Queue  size {}", items.len());
    render_lines(frame, area, &title, lines);
}

pub fn render_linked_list(
    frame: &mut Frame,
    area: Rect,
    list: &LinkedListVisualizer,
    now: Instant,
) {
    let highlighted = list.highlighted(now);
    let nodes = list.nodes();
    let last = nodes.len().saturating_sub(1);

    let cells: Vec<Cell> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| Cell {
            text: format!("{} │{}", node.value, if i == last { "∅" } else { "•" }),
            captions: [
                match (i == 0, i == last) {
                    (true, true) => "HEAD/TAIL".to_string(),
                    (true, false) => "HEAD".to_string(),
                    (false, true) => "TAIL".to_string(),
                    (false, false) => String::new(),
                },
                format!("#{}", node.id),
            ],
            highlighted: highlighted == Some(i),
        })
        .collect();

    let mut lines = if cells.is_empty() {
        empty_line("HEAD → NULL")
    } else {
        cell_rows(&cells, " → ", area.width.saturating_sub(4))
    };
    if !nodes.is_empty() {
        lines.push(Line::from(Span::styled(
            "last node → NULL",
            Style::default().fg(DEFAULT_THEME.muted),
        )));
    }
    let title = format!("Linked List  length {}", nodes.len());
    render_lines(frame, area, &title, lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            captions: [String::new(), String::new()],
            highlighted: false,
        }
    }

    #[test]
    fn test_cells_wrap_to_width() {
        let cells: Vec<Cell> = (0..5).map(|i| cell(&i.to_string())).collect();
        // two boxes of 10 plus one connector of 3 fit in 23 columns
        let lines = cell_rows(&cells, " → ", 23);
        assert_eq!(lines.len(), 3 * 6);
        let lines = cell_rows(&cells, " → ", 200);
        assert_eq!(lines.len(), 6);
    }
}
