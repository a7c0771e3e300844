//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events over an mpsc channel;
//! the event loop owns all state and redraws only when a transition
//! asks for it.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::types::ButtonId;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),

        KeyCode::Char('1') => Some(Action::Press(ButtonId::PressMe)),
        KeyCode::Char('2') => Some(Action::Press(ButtonId::ChangeMessage)),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                // Windows reports releases too; only presses act.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => tx.send(AppEvent::Key(key)),
                Ok(Event::Resize(..)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!(error = %e, "key reader stopped");
                    break;
                }
            };
            if forwarded.is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive screen until the user quits.
pub fn run(app: App) -> Result<(), AppError> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!("screen started");

    let result = event_loop(&mut terminal, app);

    restore_terminal()?;
    info!("screen closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<(), AppError> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| render(&app, frame))?;
            dirty = false;
        }

        if app.should_quit {
            break;
        }

        // Block on next event; all senders gone means input is closed.
        let Ok(event) = rx.recv() else {
            break;
        };

        match event {
            AppEvent::Resize => dirty = true,
            AppEvent::Key(key) => {
                let Some(action) = map_key(key) else {
                    continue;
                };
                debug!(?action, "action");
                match update(std::mem::take(&mut app), &action) {
                    Transition::Redraw(next) => {
                        app = next;
                        dirty = true;
                    }
                    Transition::Idle(next) => app = next,
                    Transition::Quit => app.should_quit = true,
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
