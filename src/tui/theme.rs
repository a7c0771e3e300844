//! Terminal styles and the mapping from tree styles to ratatui styles.
//!
//! Font size has no terminal equivalent and is dropped here; weight,
//! color and background carry over.

use ratatui::style::{Color, Modifier, Style};

use crate::style::{self, FontWeight};

// ============================================================================
// CHROME
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Base text color on the light container background.
pub const STYLE_SCREEN_TEXT: Style = Style::new().fg(Color::Black);

/// Button without focus.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Blue);

/// Focused button.
pub const STYLE_BUTTON_FOCUSED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// Terminal cells per style point of padding.
pub const POINTS_PER_CELL: u16 = 10;

// ============================================================================
// CONVERSION
// ============================================================================

pub fn terminal_color(color: style::Color) -> Color {
    match color {
        style::Color::Black => Color::Black,
        style::Color::White => Color::White,
        style::Color::Blue => Color::Blue,
        style::Color::Red => Color::Red,
        style::Color::Green => Color::Green,
        style::Color::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

/// Map a tree style onto a ratatui style. Unset keys stay unset so the
/// surrounding container's style shows through.
pub fn terminal_style(tree_style: &style::Style) -> Style {
    let mut out = Style::new();
    if let Some(c) = tree_style.color_value() {
        out = out.fg(terminal_color(c));
    }
    if let Some(c) = tree_style.background_value() {
        out = out.bg(terminal_color(c));
    }
    if tree_style.font_weight_value() == Some(FontWeight::Bold) {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}

pub fn padding_cells(points: u16) -> u16 {
    points / POINTS_PER_CELL
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_bold_maps_to_fg_and_modifier() {
        let tree = style::Style::new()
            .color(style::Color::Blue)
            .font_weight(FontWeight::Bold)
            .font_size(24);
        let s = terminal_style(&tree);
        assert_eq!(s.fg, Some(Color::Blue));
        assert!(s.add_modifier.contains(Modifier::BOLD));
        assert_eq!(s.bg, None);
    }

    #[test]
    fn empty_style_maps_to_nothing() {
        assert_eq!(terminal_style(&style::Style::new()), Style::new());
    }

    #[test]
    fn rgb_background_passes_through() {
        let tree = style::Style::new().background(style::Color::Rgb(0xf0, 0xf0, 0xf0));
        assert_eq!(terminal_style(&tree).bg, Some(Color::Rgb(0xf0, 0xf0, 0xf0)));
    }

    #[test]
    fn padding_converts_points_to_cells() {
        assert_eq!(padding_cells(20), 2);
        assert_eq!(padding_cells(5), 0);
    }

    #[test]
    fn focused_button_is_distinct() {
        assert_ne!(STYLE_BUTTON, STYLE_BUTTON_FOCUSED);
        assert!(STYLE_BUTTON_FOCUSED.add_modifier.contains(Modifier::BOLD));
    }
}
