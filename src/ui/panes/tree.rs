//! Binary search tree canvas
//!
//! Node coordinates come from [`crate::tree::layout`] in an 800 x 500 space
//! with y growing downwards. The canvas uses the same bounds with y flipped.

use super::utils::titled_block;
use crate::tree::{collect_edges, collect_nodes, TreeNode};
use crate::ui::theme::DEFAULT_THEME;
use crate::visualizers::TreeVisualizer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Edge},
        Paragraph,
    },
    Frame,
};
use std::time::Instant;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const NODE_RADIUS: f64 = 18.0;

pub fn render_tree(frame: &mut Frame, area: Rect, tree: &mut TreeVisualizer, now: Instant) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let highlighted = tree.highlighted(now);
    let visited = tree.visited(now);
    let count = tree.node_count();
    let root = tree.layout();

    let title = format!("Binary Search Tree  nodes {}", count);
    if count == 0 {
        frame.render_widget(
            Paragraph::new("Tree is empty. Type a value and press i to insert.")
                .style(Style::default().fg(DEFAULT_THEME.muted))
                .block(titled_block(&title, true)),
            rows[0],
        );
    } else {
        let nodes = collect_nodes(root);
        let edges = collect_edges(root);
        // canvas units per terminal column, to centre labels on their node
        let unit = WIDTH / f64::from(rows[0].width.saturating_sub(4).max(1));

        let canvas = Canvas::default()
            .block(titled_block(&title, true))
            .x_bounds([0.0, WIDTH])
            .y_bounds([0.0, HEIGHT])
            .paint(|ctx| {
                for (parent, child) in &edges {
                    ctx.draw(&Edge {
                        x1: parent.x,
                        y1: flip(parent.y),
                        x2: child.x,
                        y2: flip(child.y),
                        color: DEFAULT_THEME.muted,
                    });
                }
                ctx.layer();
                for node in &nodes {
                    ctx.draw(&Circle {
                        x: node.x,
                        y: flip(node.y),
                        radius: NODE_RADIUS,
                        color: node_color(node, highlighted, &visited),
                    });
                }
                ctx.layer();
                for node in &nodes {
                    let label = node.value.to_string();
                    let x = node.x - unit * label.len() as f64 / 2.0;
                    let style = Style::default()
                        .fg(node_color(node, highlighted, &visited))
                        .add_modifier(Modifier::BOLD);
                    ctx.print(x, flip(node.y), Span::styled(label, style));
                }
            });
        frame.render_widget(canvas, rows[0]);
    }

    let visited_line = if visited.is_empty() {
        Line::default()
    } else {
        Line::from(vec![
            Span::styled(" Visited: ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(
                visited
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" → "),
                Style::default().fg(DEFAULT_THEME.success),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(visited_line), rows[1]);
}

fn flip(y: f64) -> f64 {
    HEIGHT - y
}

fn node_color(node: &TreeNode, highlighted: Option<i64>, visited: &[i64]) -> ratatui::style::Color {
    if highlighted == Some(node.value) {
        DEFAULT_THEME.warning
    } else if visited.contains(&node.value) {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.primary
    }
}
