//! greeting-demo: a root screen that owns one message and a stateless
//! greeting that displays it.

pub mod error;
pub mod greeting;
pub mod logging;
pub mod root;
pub mod snapshot;
pub mod style;
pub mod tree;
pub mod tui;
pub mod types;
