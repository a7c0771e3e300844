//! Declarative render tree.
//!
//! Components return a `Node`; nothing here draws. The terminal adapter
//! in `tui::view` and the outline printer in `snapshot` both walk it.

use serde::Serialize;

use crate::style::Style;
use crate::types::{ButtonId, PressHandler};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Container laying its children out top to bottom.
    View { style: Style, children: Vec<Node> },
    /// A run of styled text.
    Text { content: String, style: Style },
    /// A pressable button. `on_press: None` means pressing does nothing.
    #[serde(rename_all = "camelCase")]
    Button {
        id: ButtonId,
        title: String,
        on_press: Option<PressHandler>,
    },
}

impl Node {
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Node::View { style, children }
    }

    pub fn text(content: impl Into<String>, style: Style) -> Self {
        Node::Text {
            content: content.into(),
            style,
        }
    }

    pub fn button(id: ButtonId, on_press: Option<PressHandler>) -> Self {
        Node::Button {
            id,
            title: id.title().to_string(),
            on_press,
        }
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        if let Node::View { children, .. } = self {
            for child in children {
                child.collect(out);
            }
        }
    }

    /// Text contents in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Button ids in document order.
    pub fn buttons(&self) -> Vec<ButtonId> {
        self.walk()
            .into_iter()
            .filter_map(|n| match n {
                Node::Button { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn find_button(&self, wanted: ButtonId) -> Option<&Node> {
        self.walk()
            .into_iter()
            .find(|n| matches!(n, Node::Button { id, .. } if *id == wanted))
    }

    /// Handler of the button `id`. None when absent or inert.
    pub fn handler_for(&self, id: ButtonId) -> Option<PressHandler> {
        match self.find_button(id) {
            Some(Node::Button { on_press, .. }) => *on_press,
            _ => None,
        }
    }

    /// Style of the first text node whose content equals `content`.
    pub fn text_style(&self, content: &str) -> Option<&Style> {
        self.walk().into_iter().find_map(|n| match n {
            Node::Text { content: c, style } if c == content => Some(style),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn sample() -> Node {
        Node::view(
            Style::new(),
            vec![
                Node::text("a", Style::new()),
                Node::button(ButtonId::PressMe, None),
                Node::view(Style::new(), vec![Node::text("b", Style::new().color(Color::Red))]),
                Node::button(ButtonId::ChangeMessage, Some(PressHandler::ChangeMessage)),
            ],
        )
    }

    #[test]
    fn texts_in_document_order() {
        assert_eq!(sample().texts(), vec!["a", "b"]);
    }

    #[test]
    fn buttons_in_document_order() {
        assert_eq!(
            sample().buttons(),
            vec![ButtonId::PressMe, ButtonId::ChangeMessage]
        );
    }

    #[test]
    fn inert_button_has_no_handler() {
        let tree = sample();
        assert!(tree.find_button(ButtonId::PressMe).is_some());
        assert_eq!(tree.handler_for(ButtonId::PressMe), None);
        assert_eq!(
            tree.handler_for(ButtonId::ChangeMessage),
            Some(PressHandler::ChangeMessage)
        );
    }

    #[test]
    fn nested_text_style_is_found() {
        let tree = sample();
        assert_eq!(tree.text_style("b").and_then(|s| s.color_value()), Some(Color::Red));
        assert!(tree.text_style("missing").is_none());
    }

    #[test]
    fn json_shape_is_tagged() {
        let node = Node::button(ButtonId::PressMe, None);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["id"], "press-me");
        assert_eq!(json["title"], "press me");
        assert!(json["onPress"].is_null());
    }
}
