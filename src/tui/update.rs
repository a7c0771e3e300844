//! Pure state transitions: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Focus order is read from the
//! render tree, so it always matches what is on screen.

use tracing::debug;

use crate::types::ButtonId;

use super::state::{Action, App, Transition};

pub fn update(mut app: App, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::FocusNext => {
            app.focus = step_focus(&app, 1);
            Transition::Redraw(app)
        }
        Action::FocusPrev => {
            app.focus = step_focus(&app, -1);
            Transition::Redraw(app)
        }
        Action::Activate => {
            let target = app.focus;
            press(app, target)
        }
        Action::Press(id) => press(app, *id),
    }
}

fn press(mut app: App, id: ButtonId) -> Transition {
    debug!(button = ?id, "press");
    match app.root.press(id) {
        Some(_redraw) => Transition::Redraw(app),
        None => Transition::Idle(app),
    }
}

/// Next focus target `delta` steps away, wrapping at both ends.
fn step_focus(app: &App, delta: isize) -> ButtonId {
    let order = app.root.render().buttons();
    if order.is_empty() {
        return app.focus;
    }
    let len = order.len() as isize;
    let current = order.iter().position(|b| *b == app.focus).unwrap_or(0) as isize;
    order[(current + delta).rem_euclid(len) as usize]
}

// ============================================================================
// TESTS
// ============================================================================
