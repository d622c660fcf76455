//! Plain-data view models consumed by the render components.
//!
//! Everything here is computed by `AppState::compute_viewmodel` from a state
//! snapshot and passed to the renderer by value. Render functions never touch the state directly,
//! so the list, the chart, and the map are always derived from the same
//! filtered set.

use crate::domain::ProviderId;

/// Complete renderable snapshot of the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct UiViewModel {
    pub header: HeaderInfo,
    /// One card per filtered record, in dataset order.
    pub cards: Vec<ProviderCard>,
    pub selected_index: usize,
    /// Set when the filtered set is empty.
    pub empty_state: Option<EmptyState>,
    /// Set while search mode is active.
    pub search_bar: Option<SearchBarInfo>,
    pub chart: ChartView,
    pub map: MapView,
    /// Set while the detail popup is open.
    pub detail: Option<DetailView>,
    pub footer: FooterInfo,
}

/// Title bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Active filter summary, e.g. specialty and match count.
    pub filter_summary: String,
}

/// One list entry for a filtered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCard {
    pub id: ProviderId,
    /// Avatar initials derived from the name.
    pub initials: String,
    pub name: String,
    pub specialty: String,
    pub clinic: String,
    pub timings: String,
    pub phone: String,
    pub tele: bool,
    pub is_selected: bool,
    /// Char ranges of query matches within `name`, half-open.
    pub name_highlights: Vec<(usize, usize)>,
    /// Char ranges of query matches within `clinic`, half-open.
    pub clinic_highlights: Vec<(usize, usize)>,
}

/// Empty-result placeholder content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether the query input (vs the result list) has focus.
    pub typing: bool,
}

/// Specialty distribution of the filtered set.
///
/// Bars follow the global specialty order, so labels keep a stable position
/// across re-filters; specialties absent from the filtered set are omitted
/// rather than shown at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub bars: Vec<(String, u64)>,
}

/// Map surface content: one marker per filtered record with coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// Viewport to render; `None` until a marker has ever been placed.
    pub bounds: Option<MapBounds>,
}

/// A single map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    /// Short label drawn at the marker (avatar initials).
    pub label: String,
    pub name: String,
}

/// Geographic viewport, padded around the markers it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Smallest span kept on either axis, in degrees. Stops a single marker
    /// (zero extent) from collapsing the viewport to a point.
    const MIN_SPAN: f64 = 0.01;

    /// Fraction of the marker extent added as padding on each side.
    const PAD_RATIO: f64 = 0.10;

    /// Fits a padded viewport around the given markers.
    ///
    /// Returns `None` for an empty marker list, so callers can keep their
    /// previous viewport instead of resetting it.
    #[must_use]
    pub fn fit(markers: &[MapMarker]) -> Option<Self> {
        let first = markers.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for marker in &markers[1..] {
            bounds.min_lat = bounds.min_lat.min(marker.lat);
            bounds.max_lat = bounds.max_lat.max(marker.lat);
            bounds.min_lon = bounds.min_lon.min(marker.lon);
            bounds.max_lon = bounds.max_lon.max(marker.lon);
        }
        bounds.pad();
        Some(bounds)
    }

    fn pad(&mut self) {
        let lat_pad = ((self.max_lat - self.min_lat) * Self::PAD_RATIO)
            .max(Self::MIN_SPAN / 2.0);
        let lon_pad = ((self.max_lon - self.min_lon) * Self::PAD_RATIO)
            .max(Self::MIN_SPAN / 2.0);
        self.min_lat -= lat_pad;
        self.max_lat += lat_pad;
        self.min_lon -= lon_pad;
        self.max_lon += lon_pad;
    }
}

/// Detail popup content for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ProviderId,
    pub name: String,
    pub specialty: String,
    pub clinic: String,
    pub timings: String,
    pub phone: String,
    /// `tel:` URI for the call action.
    pub tel_uri: String,
    /// Human-readable teleconsultation availability.
    pub tele_label: String,
    pub notes: String,
}

/// Status bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,
    /// Current year, for the attribution line.
    pub year: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(lat: f64, lon: f64) -> MapMarker {
        MapMarker {
            lat,
            lon,
            label: "XX".to_string(),
            name: "test".to_string(),
        }
    }

    #[test]
    fn fit_of_empty_marker_list_is_none() {
        assert_eq!(MapBounds::fit(&[]), None);
    }

    #[test]
    fn fit_contains_all_markers_with_padding() {
        let markers = vec![marker(14.0, 79.9), marker(14.1, 80.1)];
        let bounds = MapBounds::fit(&markers).unwrap();

        assert!(bounds.min_lat < 14.0);
        assert!(bounds.max_lat > 14.1);
        assert!(bounds.min_lon < 79.9);
        assert!(bounds.max_lon > 80.1);
    }

    #[test]
    fn single_marker_gets_a_minimum_viewport() {
        let bounds = MapBounds::fit(&[marker(14.0, 80.0)]).unwrap();
        assert!(bounds.max_lat - bounds.min_lat >= MapBounds::MIN_SPAN);
        assert!(bounds.max_lon - bounds.min_lon >= MapBounds::MIN_SPAN);
        // Centered on the marker.
        assert!((bounds.min_lat + bounds.max_lat - 28.0).abs() < 1e-9);
        assert!((bounds.min_lon + bounds.max_lon - 160.0).abs() < 1e-9);
    }
}
