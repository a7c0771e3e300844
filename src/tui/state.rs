//! TUI state algebra: pure types, zero effects.
//!
//! The root view owns the message; the TUI layer adds only what a
//! terminal needs on top of it: which button has focus and whether to
//! exit. Transitions are values the effects boundary interprets.

use crossterm::event::KeyEvent;

use crate::root::RootView;
use crate::style::Color;
use crate::types::ButtonId;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; layout must be recomputed.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub root: RootView,

    /// Button the Activate action presses.
    pub focus: ButtonId,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        App::new(RootView::new())
    }
}

impl App {
    /// Focus starts on the first button on screen.
    pub fn new(root: RootView) -> Self {
        let focus = root
            .render()
            .buttons()
            .first()
            .copied()
            .unwrap_or(ButtonId::PressMe);
        App {
            root,
            focus,
            should_quit: false,
        }
    }

    pub fn with_greeting_color(color: Color) -> Self {
        App::new(RootView::with_greeting_color(color))
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move focus to the next button, wrapping.
    FocusNext,
    /// Move focus to the previous button, wrapping.
    FocusPrev,
    /// Press the focused button.
    Activate,
    /// Press a specific button regardless of focus.
    Press(ButtonId),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// State changed; draw it.
    Redraw(App),
    /// Nothing visible changed; skip the draw.
    Idle(App),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
