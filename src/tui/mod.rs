//! Interactive terminal front end.
//!
//! - `state`: pure data types (App, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering of the render tree
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
