//! Specialty aggregation for the chart.
//!
//! Counts providers per specialty for the bar chart. Output ordering follows
//! the globally discovered specialty order — the distinct specialties of the
//! FULL dataset, sorted — so chart labels keep their positions as the filtered
//! subset changes. Specialties that appear in a list but not in that order
//! (possible with an operator-supplied dataset swap) are appended afterward in
//! first-seen order.

use crate::domain::Provider;

/// Computes the globally discovered specialty order from the full dataset.
///
/// Distinct specialties, sorted lexicographically. Computed once at startup
/// and reused for every chart update so labels stay stable across re-filters.
///
/// # Examples
///
/// ```
/// use medidex::dataset::{specialty_order, EmbeddedDataset, ProviderSource};
///
/// let providers = EmbeddedDataset.load().unwrap();
/// let order = specialty_order(&providers);
/// assert_eq!(order.len(), 5);
/// assert!(order.windows(2).all(|w| w[0] < w[1]));
/// ```
#[must_use]
pub fn specialty_order(providers: &[Provider]) -> Vec<String> {
    let mut order: Vec<String> = providers.iter().map(|p| p.specialty.clone()).collect();
    order.sort();
    order.dedup();
    order
}

/// Counts providers per specialty, in stable chart order.
///
/// Returns `(specialty, count)` pairs containing exactly the distinct
/// specialties present in `list`, each with a positive count. Pairs follow
/// `order` first; any specialty missing from `order` is appended in the order
/// it first appears in `list`. The counts always sum to `list.len()`.
#[must_use]
pub fn aggregate_by_specialty(list: &[Provider], order: &[String]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for provider in list {
        match counts.iter_mut().find(|(s, _)| *s == provider.specialty) {
            Some((_, count)) => *count += 1,
            None => counts.push((provider.specialty.clone(), 1)),
        }
    }

    let mut ordered: Vec<(String, u64)> = Vec::with_capacity(counts.len());
    for specialty in order {
        if let Some(idx) = counts.iter().position(|(s, _)| s == specialty) {
            ordered.push(counts.remove(idx));
        }
    }
    // Anything left over was not in the global order; keep first-seen order.
    ordered.append(&mut counts);

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: u32, specialty: &str) -> Provider {
        Provider {
            id,
            name: format!("Dr. {id}"),
            specialty: specialty.to_string(),
            timings: String::new(),
            phone: String::new(),
            clinic: String::new(),
            lat: None,
            lon: None,
            tele: false,
            notes: String::new(),
        }
    }

    #[test]
    fn order_is_distinct_and_sorted() {
        let providers = vec![
            provider(1, "Pediatrics"),
            provider(2, "Cardiology"),
            provider(3, "Pediatrics"),
        ];
        assert_eq!(specialty_order(&providers), vec!["Cardiology", "Pediatrics"]);
    }

    #[test]
    fn counts_sum_to_input_length() {
        let providers = vec![
            provider(1, "Pediatrics"),
            provider(2, "Cardiology"),
            provider(3, "Pediatrics"),
            provider(4, "Dermatology"),
        ];
        let order = specialty_order(&providers);

        let bars = aggregate_by_specialty(&providers, &order);
        let total: u64 = bars.iter().map(|(_, c)| c).sum();
        assert_eq!(total, providers.len() as u64);
    }

    #[test]
    fn keys_are_exactly_the_distinct_specialties_present() {
        let providers = vec![
            provider(1, "Pediatrics"),
            provider(2, "Cardiology"),
            provider(3, "Pediatrics"),
        ];
        let order = specialty_order(&providers);

        // Filter down to just the pediatrics records; cardiology must vanish.
        let filtered: Vec<Provider> = providers
            .iter()
            .filter(|p| p.specialty == "Pediatrics")
            .cloned()
            .collect();

        let bars = aggregate_by_specialty(&filtered, &order);
        assert_eq!(bars, vec![("Pediatrics".to_string(), 2)]);
    }

    #[test]
    fn output_follows_global_order_not_list_order() {
        let providers = vec![
            provider(1, "Pediatrics"),
            provider(2, "Cardiology"),
            provider(3, "Dermatology"),
        ];
        let order = specialty_order(&providers);

        // List order differs from the sorted global order.
        let shuffled = vec![
            provider(3, "Dermatology"),
            provider(1, "Pediatrics"),
            provider(2, "Cardiology"),
        ];

        let labels: Vec<String> = aggregate_by_specialty(&shuffled, &order)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(labels, vec!["Cardiology", "Dermatology", "Pediatrics"]);
    }

    #[test]
    fn unknown_specialties_are_appended() {
        let order = vec!["Cardiology".to_string()];
        let list = vec![
            provider(1, "Orthopedics"),
            provider(2, "Cardiology"),
            provider(3, "Ayurveda"),
        ];

        let labels: Vec<String> = aggregate_by_specialty(&list, &order)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(labels, vec!["Cardiology", "Orthopedics", "Ayurveda"]);
    }

    #[test]
    fn empty_list_yields_no_bars() {
        let order = vec!["Cardiology".to_string()];
        assert!(aggregate_by_specialty(&[], &order).is_empty());
    }
}
