//! UI layer: themes, view models, and render components.
//!
//! Rendering is a pure function of a [`UiViewModel`] snapshot: the state layer
//! computes the view model, and the components draw it. No component reads
//! application state directly.

pub mod components;
pub mod helpers;
pub mod theme;
pub mod viewmodel;

pub use theme::Theme;
pub use viewmodel::UiViewModel;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::AppState;

/// Renders one full frame from the current state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let vm = state.compute_viewmodel();
    components::render(frame, &vm, &state.theme);
}

/// The rect the detail popup occupies within `area`.
///
/// Exposed so the input layer can hit-test mouse clicks against the popup
/// (a click outside it dismisses the popup).
#[must_use]
pub fn popup_area(area: Rect) -> Rect {
    helpers::centered_rect(60, 70, area)
}
