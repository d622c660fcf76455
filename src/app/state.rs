//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! directory, along with filtering, selection, popup management, and UI view
//! model generation. It is the single owner of the record list and the filter
//! state: render functions receive derived view models by value and never
//! reach into ambient globals.
//!
//! # State Components
//!
//! - **Providers**: the fixed record set loaded at startup, never mutated
//! - **Filtered**: the subset matching the current view mode and predicates
//! - **Selection**: cursor position within the filtered results
//! - **Popup**: the detail popup state machine
//! - **Modes**: input mode (normal/search) and view mode (all/tele-only)
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms a state snapshot into a plain-data
//! [`UiViewModel`](crate::ui::viewmodel::UiViewModel): provider cards with
//! highlight ranges, the chart series, the map markers and bounds, and the
//! optional detail view. It is a pure function of the state, so every derived
//! view (list, chart, map) is recomputed together from the same filtered set.

use crate::app::modes::{InputMode, PopupState, SearchFocus, ViewMode};
use crate::dataset::{aggregate_by_specialty, specialty_order};
use crate::domain::{Provider, ProviderId};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChartView, DetailView, EmptyState, FooterInfo, HeaderInfo, MapBounds, MapMarker, MapView,
    ProviderCard, SearchBarInfo, UiViewModel,
};

/// Central application state container.
///
/// Holds the record list and all transient UI state. Mutated by the event
/// handler in response to user input; view models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The fixed record set, in dataset order. Never mutated after load.
    pub providers: Vec<Provider>,

    /// Globally discovered specialty order (distinct specialties of the full
    /// dataset, sorted). Fixed at construction; keeps chart labels stable
    /// across re-filters and drives specialty cycling.
    pub specialty_order: Vec<String>,

    /// Records matching the current view mode and filter predicates.
    ///
    /// Recomputed by [`apply_filters`](Self::apply_filters). A stable filter:
    /// original dataset order is preserved, never re-sorted.
    pub filtered: Vec<Provider>,

    /// Zero-based index of the selected record within `filtered`.
    ///
    /// Clamped to valid bounds by `apply_filters`; wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current base-set filter (all records vs teleconsultation only).
    pub view_mode: ViewMode,

    /// Current free-text query.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`. Matched as a
    /// case-insensitive substring of name + specialty + clinic.
    pub search_query: String,

    /// Selected specialty for exact-match filtering, `None` for the wildcard.
    pub specialty_filter: Option<String>,

    /// Detail popup state machine.
    pub popup: PopupState,

    /// Set when query edits have not yet been applied to `filtered`.
    ///
    /// Query keystrokes update `search_query` immediately (so the search bar
    /// echoes them) but defer the filter pass to the debounce deadline; the
    /// event loop flushes this flag via `Event::FilterDeadline`.
    pub filter_pending: bool,

    /// Last non-empty map viewport, in dataset coordinates.
    ///
    /// Only updated when the filtered set contains mapped records, so a filter
    /// that empties the map leaves the viewport where it was (the refit is a
    /// no-op at zero markers).
    pub map_bounds: Option<MapBounds>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the application state from a loaded dataset and theme.
    ///
    /// Computes the global specialty order, runs an initial filter pass (empty
    /// predicates, so the full set), and fits the map viewport to the full
    /// dataset.
    #[must_use]
    pub fn new(providers: Vec<Provider>, theme: Theme) -> Self {
        let order = specialty_order(&providers);
        let mut state = Self {
            providers,
            specialty_order: order,
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::All,
            search_query: String::new(),
            specialty_filter: None,
            popup: PopupState::Closed,
            filter_pending: false,
            map_bounds: None,
            theme,
        };
        state.apply_filters();
        state
    }

    /// Moves the selection cursor down by one, wrapping to the top at the end.
    /// No-op if the filtered list is empty.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the selection cursor up by one, wrapping to the bottom at the top.
    /// No-op if the filtered list is empty.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected record, if any.
    #[must_use]
    pub fn selected_provider(&self) -> Option<&Provider> {
        self.filtered.get(self.selected_index)
    }

    /// Looks up a record by id in the full dataset.
    #[must_use]
    pub fn provider_by_id(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Recomputes the filtered subset from the current predicates.
    ///
    /// One pass applies, in order: the view-mode filter (tele-only toggle),
    /// the specialty exact match (case-insensitive), and the query substring
    /// match over name + specialty + clinic (case-insensitive). Empty
    /// specialty and empty query act as wildcards. Original record order is
    /// preserved. The selection index is clamped to the new bounds, and the
    /// map viewport refits when the result has mapped records.
    ///
    /// Everything the renderer derives — list, chart, map — comes from the
    /// `filtered` field this method writes, so the three surfaces always
    /// update together.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_providers = self.providers.len(),
            query_len = self.search_query.len(),
            specialty = ?self.specialty_filter,
            view_mode = ?self.view_mode
        )
        .entered();

        let query = self.search_query.trim().to_lowercase();
        let specialty = self.specialty_filter.as_ref().map(|s| s.to_lowercase());

        self.filtered = self
            .providers
            .iter()
            .filter(|provider| {
                let passes_view_mode = match self.view_mode {
                    ViewMode::All => true,
                    ViewMode::TeleOnly => provider.tele,
                };
                passes_view_mode && provider.matches(specialty.as_deref(), &query)
            })
            .cloned()
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        let markers = Self::markers_for(&self.filtered);
        if let Some(bounds) = MapBounds::fit(&markers) {
            self.map_bounds = Some(bounds);
        }

        tracing::debug!(
            filtered_count = self.filtered.len(),
            marker_count = markers.len(),
            "filters applied"
        );
    }

    /// Advances the specialty selection through `None` and each specialty in
    /// the global order, in either direction.
    ///
    /// Specialty changes correspond to a discrete select-control change, so
    /// callers re-filter immediately (no debounce).
    pub fn cycle_specialty(&mut self, backward: bool) {
        // Position 0 is the wildcard; positions 1..=n map into specialty_order.
        let len = self.specialty_order.len() + 1;
        let current = self.specialty_filter.as_ref().map_or(0, |s| {
            self.specialty_order
                .iter()
                .position(|candidate| candidate == s)
                .map_or(0, |i| i + 1)
        });

        let next = if backward {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };

        self.specialty_filter = if next == 0 {
            None
        } else {
            Some(self.specialty_order[next - 1].clone())
        };
    }

    /// Opens the detail popup for a record by id.
    ///
    /// Silently ignores absent ids; re-opening the same id is idempotent.
    /// Returns whether the popup state changed or was (re-)opened.
    pub fn open_detail(&mut self, id: ProviderId) -> bool {
        if self.provider_by_id(id).is_none() {
            tracing::debug!(provider_id = id, "detail requested for unknown id");
            return false;
        }
        self.popup = PopupState::Open(id);
        true
    }

    /// Closes the detail popup. Returns `false` if it was already closed.
    pub fn close_detail(&mut self) -> bool {
        if self.popup.is_open() {
            self.popup = PopupState::Closed;
            true
        } else {
            false
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Pure with respect to the state snapshot: the list cards, the chart
    /// series, and the map markers are all derived from the same `filtered`
    /// field, so the three surfaces cannot drift apart.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let query = self.search_query.trim().to_lowercase();

        let cards: Vec<ProviderCard> = self
            .filtered
            .iter()
            .enumerate()
            .map(|(idx, provider)| self.compute_card(provider, idx, &query))
            .collect();

        let empty_state = if self.filtered.is_empty() {
            Some(EmptyState {
                message: "No doctors found for that filter.".to_string(),
                subtitle: "Press Esc to clear filters".to_string(),
            })
        } else {
            None
        };

        let markers = Self::markers_for(&self.filtered);

        UiViewModel {
            header: self.compute_header(),
            cards,
            selected_index: self.selected_index,
            empty_state,
            search_bar: self.compute_search_bar(),
            chart: ChartView {
                bars: aggregate_by_specialty(&self.filtered, &self.specialty_order),
            },
            map: MapView {
                markers,
                bounds: self.map_bounds,
            },
            detail: self.compute_detail(),
            footer: self.compute_footer(),
        }
    }

    /// Builds the marker list: one per record with both coordinates present.
    fn markers_for(list: &[Provider]) -> Vec<MapMarker> {
        list.iter()
            .filter_map(|provider| {
                provider.coordinates().map(|(lat, lon)| MapMarker {
                    lat,
                    lon,
                    label: provider.initials(),
                    name: provider.name.clone(),
                })
            })
            .collect()
    }

    fn compute_card(&self, provider: &Provider, idx: usize, query: &str) -> ProviderCard {
        let name_highlights = crate::ui::helpers::substring_ranges(&provider.name, query);
        let clinic_highlights = crate::ui::helpers::substring_ranges(&provider.clinic, query);

        ProviderCard {
            id: provider.id,
            initials: provider.initials(),
            name: provider.name.clone(),
            specialty: provider.specialty.clone(),
            clinic: provider.clinic.clone(),
            timings: provider.timings.clone(),
            phone: provider.phone.clone(),
            tele: provider.tele,
            is_selected: idx == self.selected_index,
            name_highlights,
            clinic_highlights,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let specialty = self
            .specialty_filter
            .as_deref()
            .unwrap_or("All specialties");
        let mut filter_summary = format!(
            " {specialty} · {} of {} doctors ",
            self.filtered.len(),
            self.providers.len()
        );
        if self.view_mode == ViewMode::TeleOnly {
            filter_summary.push_str("· tele only ");
        }

        HeaderInfo {
            title: " MediDex · Clinic Directory ".to_string(),
            filter_summary,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            _ if self.popup.is_open() => {
                "Esc/Enter: close  c: call  q: close".to_string()
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: details".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  Tab: specialty  t: tele  Enter: details  c: call  q: quit"
                    .to_string()
            }
        };

        FooterInfo {
            keybindings,
            year: chrono::Utc::now().format("%Y").to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
                typing: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
            })
        } else {
            None
        }
    }

    fn compute_detail(&self) -> Option<DetailView> {
        let id = self.popup.open_id()?;
        let provider = self.provider_by_id(id)?;

        Some(DetailView {
            id: provider.id,
            name: provider.name.clone(),
            specialty: provider.specialty.clone(),
            clinic: provider.clinic.clone(),
            timings: provider.timings.clone(),
            phone: provider.phone.clone(),
            tel_uri: provider.tel_uri(),
            tele_label: provider.tele_label().to_string(),
            notes: provider.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{EmbeddedDataset, ProviderSource};

    fn state() -> AppState {
        AppState::new(EmbeddedDataset.load().unwrap(), Theme::default())
    }

    #[test]
    fn empty_filters_return_full_set_in_original_order() {
        let state = state();
        assert_eq!(state.filtered.len(), state.providers.len());
        let ids: Vec<u32> = state.filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filtered_records_match_both_predicates() {
        let mut state = state();
        state.specialty_filter = Some("Pediatrics".to_string());
        state.search_query = "clinic".to_string();
        state.apply_filters();

        assert!(state.filtered.len() <= state.providers.len());
        for provider in &state.filtered {
            assert_eq!(provider.specialty.to_lowercase(), "pediatrics");
            assert!(provider.search_text().contains("clinic"));
        }
    }

    #[test]
    fn pediatrics_scenario_one_record_one_bar_one_marker() {
        let mut state = state();
        state.specialty_filter = Some("Pediatrics".to_string());
        state.apply_filters();

        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].name, "Dr. A. Devi");

        let vm = state.compute_viewmodel();
        assert_eq!(vm.chart.bars, vec![("Pediatrics".to_string(), 1)]);
        assert_eq!(vm.map.markers.len(), 1);
    }

    #[test]
    fn clinic_query_matches_regardless_of_specialty() {
        let mut state = state();
        state.search_query = "CLINIC".to_string();
        state.apply_filters();

        // Kuppam Clinic, Nellore Rural Clinic; the others say Centre/Camp.
        let ids: Vec<u32> = state.filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn query_without_matches_yields_empty_state_not_error() {
        let mut state = state();
        state.search_query = "zzz-no-such-doctor".to_string();
        state.apply_filters();

        assert!(state.filtered.is_empty());
        assert_eq!(state.selected_index, 0);

        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.is_some());
        assert!(vm.cards.is_empty());
        assert!(vm.chart.bars.is_empty());
        assert_eq!(vm.map.markers.len(), 0);
    }

    #[test]
    fn tele_only_view_narrows_the_base_set() {
        let mut state = state();
        state.view_mode = ViewMode::TeleOnly;
        state.apply_filters();

        assert!(state.filtered.iter().all(|p| p.tele));
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, state.filtered.len() - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        // Narrowing the set clamps the cursor.
        state.selected_index = 4;
        state.specialty_filter = Some("Dermatology".to_string());
        state.apply_filters();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_provider().unwrap().id, 5);
    }

    #[test]
    fn open_detail_for_present_id_exposes_record_fields() {
        let mut state = state();
        assert!(state.open_detail(2));

        let vm = state.compute_viewmodel();
        let detail = vm.detail.unwrap();
        assert_eq!(detail.name, "Dr. A. Devi");
        assert_eq!(detail.phone, "+91-8888000012");
        assert_eq!(detail.clinic, "Kuppam Clinic");
        assert_eq!(detail.tel_uri, "tel:+91-8888000012");
        assert_eq!(detail.tele_label, "Not available");
    }

    #[test]
    fn open_detail_for_absent_id_leaves_state_unchanged() {
        let mut state = state();
        assert!(!state.open_detail(99));
        assert_eq!(state.popup, PopupState::Closed);
        assert!(state.compute_viewmodel().detail.is_none());
    }

    #[test]
    fn reopening_same_id_is_idempotent() {
        let mut state = state();
        assert!(state.open_detail(3));
        assert!(state.open_detail(3));
        assert_eq!(state.popup, PopupState::Open(3));

        assert!(state.close_detail());
        assert!(!state.close_detail());
    }

    #[test]
    fn marker_count_equals_records_with_coordinates() {
        let mut state = state();
        // Strip coordinates from one record to exercise the exclusion.
        state.providers[0].lat = None;
        state.apply_filters();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 5);
        assert_eq!(vm.map.markers.len(), 4);

        // The unmapped record still counts in the chart.
        let total: u64 = vm.chart.bars.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn zero_markers_keep_previous_map_bounds() {
        let mut state = state();
        let initial = state.map_bounds.expect("full dataset has markers");

        state.search_query = "zzz".to_string();
        state.apply_filters();

        assert!(state.compute_viewmodel().map.markers.is_empty());
        assert_eq!(state.map_bounds, Some(initial));
    }

    #[test]
    fn cycle_specialty_walks_wildcard_and_global_order() {
        let mut state = state();
        assert_eq!(state.specialty_filter, None);

        state.cycle_specialty(false);
        assert_eq!(
            state.specialty_filter.as_deref(),
            Some(state.specialty_order[0].as_str())
        );

        // A full loop lands back on the wildcard.
        for _ in 0..state.specialty_order.len() {
            state.cycle_specialty(false);
        }
        assert_eq!(state.specialty_filter, None);

        state.cycle_specialty(true);
        assert_eq!(
            state.specialty_filter.as_deref(),
            Some(state.specialty_order.last().unwrap().as_str())
        );
    }

    #[test]
    fn chart_labels_follow_global_order() {
        let state = state();
        let vm = state.compute_viewmodel();
        let labels: Vec<&str> = vm.chart.bars.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Cardiology (visits)",
                "Dermatology",
                "General Physician",
                "Gynaecology",
                "Pediatrics"
            ]
        );
    }

    #[test]
    fn query_highlights_land_on_the_matched_card_fields() {
        let mut state = state();
        state.search_query = "kuppam".to_string();
        state.apply_filters();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 1);
        assert!(vm.cards[0].name_highlights.is_empty());
        assert_eq!(vm.cards[0].clinic_highlights, vec![(0, 6)]);
    }
}
