//! Domain types for greeting-demo.

use std::fmt;

use serde::Serialize;

// ============================================================================
// MESSAGE
// ============================================================================

/// Text shown before any button press.
pub const INITIAL_MESSAGE: &str = "Hello World!";

/// Text set by the "Change Message" button.
pub const CHANGED_MESSAGE: &str = "Hello from React Native!";

/// The display string owned by the root view.
///
/// Always present: there is no empty or null state, only the initial
/// text and whatever a setter last stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message(text.into())
    }

    /// The literal the "Change Message" button stores.
    pub fn changed() -> Self {
        Message::new(CHANGED_MESSAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::new(INITIAL_MESSAGE)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

/// Identity of a button on the root screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonId {
    /// "press me": no handler attached.
    PressMe,
    /// "Change Message": replaces the message.
    ChangeMessage,
}

impl ButtonId {
    pub fn title(self) -> &'static str {
        match self {
            ButtonId::PressMe => "press me",
            ButtonId::ChangeMessage => "Change Message",
        }
    }
}

/// What a button does when pressed. Buttons without one are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PressHandler {
    ChangeMessage,
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Snapshot output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
