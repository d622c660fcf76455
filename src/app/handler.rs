//! Event handling and state transitions.
//!
//! Translates semantic [`Event`]s (already decoded from raw terminal input by
//! the binary) into [`AppState`] mutations plus side-effecting [`Action`]s for
//! the caller to execute. The handler is the only place state transitions
//! happen, which keeps the input layer and the render layer decoupled.

use crate::app::actions::Action;
use crate::app::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::state::AppState;
use crate::domain::{ProviderId, Result};

/// Semantic input events, decoded from raw key and mouse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Move the selection cursor down.
    KeyDown,
    /// Move the selection cursor up.
    KeyUp,
    /// Quit the application.
    Quit,
    /// Open the detail popup for the selected record.
    OpenDetail,
    /// Open the detail popup for a specific record id (deep link, mouse).
    OpenDetailById(ProviderId),
    /// Close the detail popup.
    CloseDetail,
    /// Request a phone call to the popup record, or the selection.
    CallSelected,
    /// Enter search mode with the query input focused.
    SearchMode,
    /// Refocus the query input while in search mode.
    FocusSearchBar,
    /// Hand focus from the query input to the result list.
    FocusResults,
    /// Leave search mode, keeping the query.
    ExitSearch,
    /// Append a character to the query.
    Char(char),
    /// Remove the last character from the query.
    Backspace,
    /// Context-dependent escape: close popup, leave search, or clear filters.
    Escape,
    /// Select the next specialty (wildcard included).
    CycleSpecialty,
    /// Select the previous specialty.
    CycleSpecialtyBack,
    /// Toggle the teleconsultation-only view.
    ToggleTeleFilter,
    /// The query debounce window elapsed; apply pending edits.
    FilterDeadline,
}

/// Applies an event to the state.
///
/// Returns `(needs_render, actions)`: whether the UI should redraw, and any
/// side effects for the caller to execute. Query keystrokes mark the filter
/// pass pending instead of running it; the event loop emits
/// [`Event::FilterDeadline`] once the debounce window closes. Discrete filter
/// changes (specialty, tele toggle) re-filter immediately.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    tracing::debug!(?event, "handling event");

    let result = match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::Quit => (false, vec![Action::Quit]),
        Event::OpenDetail => {
            let changed = state
                .selected_provider()
                .map(|p| p.id)
                .map_or(false, |id| state.open_detail(id));
            (changed, vec![])
        }
        Event::OpenDetailById(id) => {
            // Unknown ids (stale deep links) are ignored without rendering.
            (state.open_detail(id), vec![])
        }
        Event::CloseDetail => (state.close_detail(), vec![]),
        Event::CallSelected => {
            // The popup record wins over the list selection when both exist.
            let uri = state
                .popup
                .open_id()
                .and_then(|id| state.provider_by_id(id))
                .or_else(|| state.selected_provider())
                .map(|p| p.tel_uri());
            match uri {
                Some(uri) => (false, vec![Action::OpenPhoneLink { uri }]),
                None => (false, vec![]),
            }
        }
        Event::SearchMode | Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            flush_pending(state);
            (true, vec![])
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            flush_pending(state);
            (true, vec![])
        }
        Event::Char(c) => {
            state.search_query.push(c);
            state.filter_pending = true;
            (true, vec![])
        }
        Event::Backspace => {
            if state.search_query.pop().is_some() {
                state.filter_pending = true;
            }
            (true, vec![])
        }
        Event::Escape => handle_escape(state),
        Event::CycleSpecialty => {
            state.cycle_specialty(false);
            state.apply_filters();
            (true, vec![])
        }
        Event::CycleSpecialtyBack => {
            state.cycle_specialty(true);
            state.apply_filters();
            (true, vec![])
        }
        Event::ToggleTeleFilter => {
            state.view_mode = match state.view_mode {
                ViewMode::All => ViewMode::TeleOnly,
                ViewMode::TeleOnly => ViewMode::All,
            };
            state.apply_filters();
            (true, vec![])
        }
        Event::FilterDeadline => {
            if flush_pending(state) {
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
    };

    Ok(result)
}

/// Runs the deferred filter pass, if one is pending.
fn flush_pending(state: &mut AppState) -> bool {
    if state.filter_pending {
        state.filter_pending = false;
        state.apply_filters();
        true
    } else {
        false
    }
}

/// Escape narrows scope one layer at a time: popup first, then search mode,
/// then the filters themselves.
fn handle_escape(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.close_detail() {
        return (true, vec![]);
    }
    if matches!(state.input_mode, InputMode::Search(_)) {
        state.input_mode = InputMode::Normal;
        flush_pending(state);
        return (true, vec![]);
    }
    if !state.search_query.is_empty() || state.specialty_filter.is_some() {
        state.search_query.clear();
        state.specialty_filter = None;
        state.filter_pending = false;
        state.apply_filters();
        return (true, vec![]);
    }
    (false, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::PopupState;
    use crate::dataset::{EmbeddedDataset, ProviderSource};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(EmbeddedDataset.load().unwrap(), Theme::default())
    }

    fn handle(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, event).unwrap()
    }

    #[test]
    fn typed_characters_defer_filtering_until_the_deadline() {
        let mut state = state();
        handle(&mut state, Event::SearchMode);
        for c in "devi".chars() {
            handle(&mut state, Event::Char(c));
        }

        // Query is visible immediately, but the list has not narrowed yet.
        assert_eq!(state.search_query, "devi");
        assert_eq!(state.filtered.len(), 5);
        assert!(state.filter_pending);

        let (render, _) = handle(&mut state, Event::FilterDeadline);
        assert!(render);
        assert_eq!(state.filtered.len(), 1);
        assert!(!state.filter_pending);
    }

    #[test]
    fn deadline_without_pending_edits_is_a_no_op() {
        let mut state = state();
        let (render, actions) = handle(&mut state, Event::FilterDeadline);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn focusing_results_flushes_the_pending_query() {
        let mut state = state();
        handle(&mut state, Event::SearchMode);
        handle(&mut state, Event::Char('k'));
        handle(&mut state, Event::FocusResults);

        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
        assert!(!state.filter_pending);
        // "k" matches Karedu, Kuppam, Kumar, and Khan, but not Sharma.
        assert_eq!(state.filtered.len(), 4);
    }

    #[test]
    fn specialty_cycling_filters_immediately() {
        let mut state = state();
        handle(&mut state, Event::CycleSpecialty);
        assert_eq!(
            state.specialty_filter.as_deref(),
            Some("Cardiology (visits)")
        );
        assert_eq!(state.filtered.len(), 1);
    }

    #[test]
    fn tele_toggle_flips_the_view_mode() {
        let mut state = state();
        handle(&mut state, Event::ToggleTeleFilter);
        assert_eq!(state.view_mode, ViewMode::TeleOnly);
        assert_eq!(state.filtered.len(), 2);

        handle(&mut state, Event::ToggleTeleFilter);
        assert_eq!(state.view_mode, ViewMode::All);
        assert_eq!(state.filtered.len(), 5);
    }

    #[test]
    fn open_detail_uses_the_current_selection() {
        let mut state = state();
        handle(&mut state, Event::KeyDown);
        let (render, _) = handle(&mut state, Event::OpenDetail);
        assert!(render);
        assert_eq!(state.popup, PopupState::Open(2));
    }

    #[test]
    fn deep_link_to_unknown_id_is_silently_ignored() {
        let mut state = state();
        let (render, actions) = handle(&mut state, Event::OpenDetailById(42));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.popup, PopupState::Closed);
    }

    #[test]
    fn call_prefers_the_popup_record_over_the_selection() {
        let mut state = state();
        handle(&mut state, Event::OpenDetailById(4));
        let (_, actions) = handle(&mut state, Event::CallSelected);
        assert_eq!(
            actions,
            vec![Action::OpenPhoneLink {
                uri: "tel:+91-8888000014".to_string()
            }]
        );
    }

    #[test]
    fn call_falls_back_to_the_selection_when_no_popup() {
        let mut state = state();
        let (_, actions) = handle(&mut state, Event::CallSelected);
        assert_eq!(
            actions,
            vec![Action::OpenPhoneLink {
                uri: "tel:+91-8888000011".to_string()
            }]
        );
    }

    #[test]
    fn escape_unwinds_popup_then_search_then_filters() {
        let mut state = state();
        handle(&mut state, Event::SearchMode);
        handle(&mut state, Event::Char('d'));
        handle(&mut state, Event::FilterDeadline);
        handle(&mut state, Event::OpenDetail);
        assert!(state.popup.is_open());

        handle(&mut state, Event::Escape);
        assert!(!state.popup.is_open());
        assert!(matches!(state.input_mode, InputMode::Search(_)));

        handle(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "d");

        handle(&mut state, Event::Escape);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 5);

        // Nothing left to unwind.
        let (render, _) = handle(&mut state, Event::Escape);
        assert!(!render);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = state();
        let (_, actions) = handle(&mut state, Event::Quit);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
