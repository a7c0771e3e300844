//! Snapshot formatting for render trees.
//!
//! Pure functions: (Node, OutputFormat) → String. No I/O.

use crate::error::AppError;
use crate::root::RootView;
use crate::tree::Node;
use crate::types::{ButtonId, OutputFormat};

/// Fresh root view with `presses` applied in order.
pub fn root_after(mut root: RootView, presses: &[ButtonId]) -> RootView {
    for &id in presses {
        let _ = root.press(id);
    }
    root
}

/// Format a render tree for output.
pub fn format_tree(tree: &Node, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Human => Ok(format_human(tree)),
        OutputFormat::Json => format_json(tree),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(tree: &Node) -> String {
    let mut out = String::new();
    write_node(tree, 0, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::View { style, children } => {
            out.push_str(&format!("{}View {}\n", indent, style));
            for child in children {
                write_node(child, depth + 1, out);
            }
        }
        Node::Text { content, style } => {
            out.push_str(&format!("{}Text {:?} {}\n", indent, content, style));
        }
        Node::Button { title, on_press, .. } => {
            let action = match on_press {
                Some(handler) => format!("on press: {:?}", handler),
                None => "inert".to_string(),
            };
            out.push_str(&format!("{}Button {:?} ({})\n", indent, title, action));
        }
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(tree: &Node) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(tree)?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// TESTS
// ============================================================================
