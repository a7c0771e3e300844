//! Root view: composes the screen and owns the message.
//!
//! The message is the only mutable state in the program. It changes
//! through `set_message`, which hands back a [`Redraw`] the caller must
//! act on. Rendering is a pure function of the current state.

use tracing::debug;

use crate::greeting::greeting;
use crate::style::{Align, Color, Style};
use crate::tree::Node;
use crate::types::{ButtonId, Message, PressHandler};

/// Static heading above the buttons.
pub const HEADING: &str = "Hello World";

/// Background of the root container.
pub const BACKGROUND: Color = Color::Rgb(0xf0, 0xf0, 0xf0);

/// Notification that the state changed and the screen must be redrawn.
#[must_use = "a state change must be followed by a redraw"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw;

#[derive(Debug, Clone, PartialEq)]
pub struct RootView {
    message: Message,
    /// Override handed to the greeting on every render.
    greeting_style: Style,
}

impl Default for RootView {
    fn default() -> Self {
        RootView::new()
    }
}

impl RootView {
    /// Initial state: "Hello World!" with a blue greeting.
    pub fn new() -> Self {
        RootView::with_greeting_color(Color::Blue)
    }

    pub fn with_greeting_color(color: Color) -> Self {
        RootView {
            message: Message::default(),
            greeting_style: Style::new().color(color),
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn greeting_style(&self) -> &Style {
        &self.greeting_style
    }

    /// Replace the message wholesale.
    pub fn set_message(&mut self, message: Message) -> Redraw {
        debug!(from = %self.message, to = %message, "message set");
        self.message = message;
        Redraw
    }

    /// Run a button's handler.
    pub fn handle(&mut self, handler: PressHandler) -> Redraw {
        match handler {
            PressHandler::ChangeMessage => self.set_message(Message::changed()),
        }
    }

    /// Press a button by id.
    ///
    /// Looks the button up in the current render tree and runs whatever
    /// handler it carries. Inert or missing buttons yield `None`.
    pub fn press(&mut self, id: ButtonId) -> Option<Redraw> {
        let handler = self.render().handler_for(id);
        match handler {
            Some(h) => Some(self.handle(h)),
            None => {
                debug!(button = ?id, "press ignored: no handler");
                None
            }
        }
    }

    /// Container style: vertical, centered, padded.
    pub fn container_style() -> Style {
        Style::new()
            .flex(1)
            .justify_content(Align::Center)
            .align_items(Align::Center)
            .background(BACKGROUND)
            .padding(20)
    }

    pub fn render(&self) -> Node {
        Node::view(
            RootView::container_style(),
            vec![
                Node::text(HEADING, Style::new()),
                Node::button(ButtonId::PressMe, None),
                greeting(&self.message, &self.greeting_style),
                Node::button(ButtonId::ChangeMessage, Some(PressHandler::ChangeMessage)),
            ],
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontWeight;
    use crate::types::{CHANGED_MESSAGE, INITIAL_MESSAGE};

    fn displayed(root: &RootView) -> String {
        // Heading first, greeting second.
        root.render().texts()[1].to_string()
    }

    #[test]
    fn initial_render_shows_hello_world() {
        let root = RootView::new();
        assert_eq!(displayed(&root), INITIAL_MESSAGE);
        assert_eq!(root.render().texts(), vec!["Hello World", "Hello World!"]);
    }

    #[test]
    fn press_me_is_inert_in_every_state() {
        let mut root = RootView::new();
        assert_eq!(root.press(ButtonId::PressMe), None);
        assert_eq!(displayed(&root), INITIAL_MESSAGE);

        let _ = root.press(ButtonId::ChangeMessage);
        assert_eq!(root.press(ButtonId::PressMe), None);
        assert_eq!(displayed(&root), CHANGED_MESSAGE);
    }

    #[test]
    fn change_message_sets_literal_and_redraws() {
        let mut root = RootView::new();
        assert_eq!(root.press(ButtonId::ChangeMessage), Some(Redraw));
        assert_eq!(displayed(&root), CHANGED_MESSAGE);
    }

    #[test]
    fn change_message_from_arbitrary_state() {
        let mut root = RootView::new();
        let _ = root.set_message(Message::new("something else"));
        let _ = root.press(ButtonId::ChangeMessage);
        assert_eq!(root.message().as_str(), CHANGED_MESSAGE);
    }

    #[test]
    fn change_message_is_idempotent_after_first_press() {
        let mut root = RootView::new();
        let _ = root.press(ButtonId::ChangeMessage);
        assert_eq!(root.press(ButtonId::ChangeMessage), Some(Redraw));
        assert_eq!(displayed(&root), CHANGED_MESSAGE);
    }

    #[test]
    fn screen_order_matches_layout() {
        let tree = RootView::new().render();
        assert_eq!(tree.buttons(), vec![ButtonId::PressMe, ButtonId::ChangeMessage]);
        match &tree {
            Node::View { children, .. } => {
                assert!(matches!(&children[0], Node::Text { content, .. } if content == HEADING));
                assert!(matches!(&children[1], Node::Button { id: ButtonId::PressMe, on_press: None, .. }));
                assert!(matches!(&children[2], Node::View { .. }));
                assert!(matches!(
                    &children[3],
                    Node::Button { id: ButtonId::ChangeMessage, on_press: Some(_), .. }
                ));
            }
            other => panic!("Expected View, got {:?}", other),
        }
    }

    #[test]
    fn greeting_is_blue_bold_24() {
        let tree = RootView::new().render();
        let style = tree.text_style(INITIAL_MESSAGE).expect("greeting text");
        assert_eq!(style.color_value(), Some(Color::Blue));
        assert_eq!(style.font_weight_value(), Some(FontWeight::Bold));
        assert_eq!(style.font_size_value(), Some(24));
    }

    #[test]
    fn custom_greeting_color_flows_to_child() {
        let tree = RootView::with_greeting_color(Color::Red).render();
        let style = tree.text_style(INITIAL_MESSAGE).expect("greeting text");
        assert_eq!(style.color_value(), Some(Color::Red));
    }

    #[test]
    fn heading_has_no_style() {
        let tree = RootView::new().render();
        assert!(tree.text_style(HEADING).is_some_and(|s| s.is_empty()));
    }

    #[test]
    fn container_is_centered_padded_and_tinted() {
        let style = RootView::container_style();
        assert_eq!(style.justify_content_value(), Some(Align::Center));
        assert_eq!(style.align_items_value(), Some(Align::Center));
        assert_eq!(style.padding_value(), Some(20));
        assert_eq!(style.background_value(), Some(BACKGROUND));
    }
}
