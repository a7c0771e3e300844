//! Pure rendering: draw the root view's render tree into a ratatui frame.
//!
//! This is the toolkit adapter. Components describe the screen as a
//! `Node` tree; this module turns that tree into lines and blocks. The
//! only effect is Frame::render_widget() writing to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::style::{Align, Style};
use crate::tree::Node;
use crate::types::ButtonId;

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current state to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_help(), chunks[2]);

    render_tree(&app.root.render(), app.focus, frame, chunks[1]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled(
        "greeting-demo",
        theme::STYLE_TITLE,
    )]))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[Tab/j/k] focus  [Enter] press  [1/2] press button  [q] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// TREE
// ============================================================================

/// Draw the top-level node.
///
/// A top-level View becomes a filled, padded block whose children are
/// stacked with one blank line between them and positioned along the
/// vertical axis by `justifyContent`.
fn render_tree(tree: &Node, focus: ButtonId, frame: &mut Frame, area: Rect) {
    let Node::View { style, children } = tree else {
        let mut lines = Vec::new();
        node_lines(tree, focus, Alignment::Left, &mut lines);
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    let padding = theme::padding_cells(style.padding_value().unwrap_or(0));
    let block = Block::new()
        .style(theme::STYLE_SCREEN_TEXT.patch(theme::terminal_style(style)))
        .padding(Padding::uniform(padding));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let align = alignment(style).unwrap_or(Alignment::Left);
    let mut lines = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        node_lines(child, focus, align, &mut lines);
    }

    let height = lines.len() as u16;
    let [content] = Layout::vertical([Constraint::Length(height)])
        .flex(vertical_flex(style))
        .areas(inner);
    frame.render_widget(Paragraph::new(lines), content);
}

/// Flatten a node into display lines. Nested views contribute their
/// children directly, with their own `alignItems` if set.
fn node_lines(node: &Node, focus: ButtonId, align: Alignment, out: &mut Vec<Line<'static>>) {
    match node {
        Node::View { style, children } => {
            let align = alignment(style).unwrap_or(align);
            for child in children {
                node_lines(child, focus, align, out);
            }
        }
        Node::Text { content, style } => {
            out.push(
                Line::from(Span::styled(content.clone(), theme::terminal_style(style)))
                    .alignment(align),
            );
        }
        Node::Button { id, title, .. } => {
            let style = if *id == focus {
                theme::STYLE_BUTTON_FOCUSED
            } else {
                theme::STYLE_BUTTON
            };
            out.push(Line::from(Span::styled(format!("[ {} ]", title), style)).alignment(align));
        }
    }
}

fn alignment(style: &Style) -> Option<Alignment> {
    style.align_items_value().map(|a| match a {
        Align::FlexStart => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::FlexEnd => Alignment::Right,
    })
}

fn vertical_flex(style: &Style) -> Flex {
    match style.justify_content_value() {
        Some(Align::Center) => Flex::Center,
        Some(Align::FlexEnd) => Flex::End,
        Some(Align::FlexStart) | None => Flex::Start,
    }
}

// ============================================================================
// TESTS
// ============================================================================
