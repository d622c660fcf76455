//! Application layer: state, input modes, event handling, and side effects.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, PopupState, SearchFocus, ViewMode};
pub use state::AppState;
