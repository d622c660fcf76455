//! Provider domain model and operations.
//!
//! This module defines the core `Provider` type representing one doctor/clinic entry
//! in the fixed dataset. Providers are immutable for the lifetime of the process:
//! the dataset is loaded once at startup and never mutated, so everything derived
//! from it (filters, counts, map markers) is recomputed from the same records.

use serde::{Deserialize, Serialize};

/// Stable integer identity of a provider record.
///
/// Unique across the dataset; uniqueness is enforced at load time by
/// [`crate::dataset::validate`].
pub type ProviderId = u32;

/// One doctor/clinic entry in the fixed dataset.
///
/// Records are read-only after load. Coordinates are optional per field; a
/// record is only mappable when both are present (see [`Provider::coordinates`]).
/// Records without coordinates still appear in the list and the specialty chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Unique, stable identity across the dataset.
    pub id: ProviderId,

    /// Display name, e.g. "Dr. A. Devi".
    pub name: String,

    /// Medical category used for grouping and filtering.
    pub specialty: String,

    /// Free-text visiting schedule.
    pub timings: String,

    /// E.164-like phone string, rendered as a `tel:` link.
    pub phone: String,

    /// Clinic or camp the provider attends.
    pub clinic: String,

    /// Latitude in decimal degrees, if known.
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees, if known.
    #[serde(default)]
    pub lon: Option<f64>,

    /// Whether teleconsultation is offered.
    #[serde(default)]
    pub tele: bool,

    /// Free-text notes shown in the detail popup.
    #[serde(default)]
    pub notes: String,
}

impl Provider {
    /// Returns `(lat, lon)` when both coordinates are present.
    ///
    /// Records missing either coordinate are excluded from the map only; they
    /// still count in the list and the specialty chart.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }

    /// Returns the `tel:` URI for this provider's raw phone string.
    ///
    /// # Examples
    ///
    /// ```
    /// use medidex::dataset::{EmbeddedDataset, ProviderSource};
    ///
    /// let provider = EmbeddedDataset.load().unwrap().remove(0);
    /// assert!(provider.tel_uri().starts_with("tel:+91-"));
    /// ```
    #[must_use]
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// Returns up to two uppercase initials for the avatar badge.
    ///
    /// Takes the first character of the first two whitespace-separated words,
    /// matching the card avatars of the directory ("Dr. S. Reddy" → "DS").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Human-readable teleconsultation label for the detail popup.
    #[must_use]
    pub const fn tele_label(&self) -> &'static str {
        if self.tele {
            "Available"
        } else {
            "Not available"
        }
    }

    /// The lowercased haystack the free-text query is matched against.
    ///
    /// Concatenation of name, specialty and clinic, in that order, which is
    /// exactly the set of fields the search box covers.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.specialty, self.clinic).to_lowercase()
    }

    /// Tests this record against the current filter predicates.
    ///
    /// Both arguments are expected pre-normalized: `specialty` lowercased (or
    /// `None` for the wildcard), `query` trimmed and lowercased (empty string
    /// for the wildcard). Specialty is an exact match; the query is a substring
    /// match against [`search_text`](Self::search_text).
    #[must_use]
    pub fn matches(&self, specialty: Option<&str>, query: &str) -> bool {
        let specialty_ok = specialty.map_or(true, |s| self.specialty.to_lowercase() == s);
        let query_ok = query.is_empty() || self.search_text().contains(query);
        specialty_ok && query_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Provider {
        Provider {
            id: 7,
            name: "Dr. A. Devi".to_string(),
            specialty: "Pediatrics".to_string(),
            timings: "Tue,Thu 09:00–13:00".to_string(),
            phone: "+91-8888000012".to_string(),
            clinic: "Kuppam Clinic".to_string(),
            lat: Some(13.9991),
            lon: Some(79.9902),
            tele: false,
            notes: String::new(),
        }
    }

    #[test]
    fn coordinates_require_both_fields() {
        let mut provider = sample();
        assert_eq!(provider.coordinates(), Some((13.9991, 79.9902)));

        provider.lon = None;
        assert_eq!(provider.coordinates(), None);
    }

    #[test]
    fn tel_uri_uses_raw_phone_string() {
        assert_eq!(sample().tel_uri(), "tel:+91-8888000012");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(sample().initials(), "DA");

        let mut provider = sample();
        provider.name = "ashaworker".to_string();
        assert_eq!(provider.initials(), "A");
    }

    #[test]
    fn matches_specialty_exactly_case_insensitive() {
        let provider = sample();
        assert!(provider.matches(Some("pediatrics"), ""));
        assert!(!provider.matches(Some("dermatology"), ""));
    }

    #[test]
    fn matches_query_as_substring_across_fields() {
        let provider = sample();
        // name fragment
        assert!(provider.matches(None, "devi"));
        // clinic fragment, case folded
        assert!(provider.matches(None, "kuppam"));
        // specialty fragment
        assert!(provider.matches(None, "pedia"));
        // not present in name/specialty/clinic
        assert!(!provider.matches(None, "cardio"));
        // timings are not searched
        assert!(!provider.matches(None, "tue,thu"));
    }

    #[test]
    fn empty_predicates_are_wildcards() {
        assert!(sample().matches(None, ""));
    }
}
