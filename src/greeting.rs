//! Greeting display: stateless child that renders a styled message.

use crate::style::{Align, FontWeight, Style};
use crate::tree::Node;
use crate::types::Message;

pub const DEFAULT_FONT_SIZE: u16 = 24;

/// Default text style, applied before the caller's override.
pub fn default_style() -> Style {
    Style::new()
        .font_size(DEFAULT_FONT_SIZE)
        .font_weight(FontWeight::Bold)
}

/// Render `message` in a centered container.
///
/// The text style is `default_style()` merged with `style`; keys set by
/// the caller win.
pub fn greeting(message: &Message, style: &Style) -> Node {
    Node::view(
        Style::new().align_items(Align::Center),
        vec![Node::text(message.as_str(), default_style().merge(style))],
    )
}
