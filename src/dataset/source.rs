//! Provider dataset sources.
//!
//! This module defines the [`ProviderSource`] trait that abstracts over where the
//! fixed provider dataset comes from, plus the two shipped implementations: the
//! JSON dataset embedded in the binary and an operator-supplied JSON file. The
//! dataset is read once at startup and never written back.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: one load operation returning the full,
//! validated record set. There is no mutation surface because the records are
//! immutable for the lifetime of the process.

use crate::domain::error::{MedidexError, Result};
use crate::domain::Provider;
use std::collections::HashSet;
use std::path::PathBuf;

/// The dataset compiled into the binary.
const EMBEDDED_PROVIDERS: &str = include_str!("../../data/providers.json");

/// Abstraction over read-only provider dataset backends.
///
/// Implementations load and validate the complete record set in one call.
///
/// # Implementations
///
/// - [`EmbeddedDataset`]: the JSON dataset compiled into the binary (default)
/// - [`JsonDataset`]: a JSON file supplied via `--dataset` or config
///
/// # Examples
///
/// ```
/// use medidex::dataset::{EmbeddedDataset, ProviderSource};
///
/// let providers = EmbeddedDataset.load().unwrap();
/// assert!(!providers.is_empty());
/// ```
pub trait ProviderSource {
    /// Loads and validates the full provider record set.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, the JSON cannot be
    /// parsed, or validation fails (see [`validate`]).
    fn load(&self) -> Result<Vec<Provider>>;
}

/// Dataset source backed by the JSON compiled into the binary.
///
/// This is the zero-configuration default: the five-record clinic directory
/// ships inside the executable, so the binary runs without any files present.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl ProviderSource for EmbeddedDataset {
    fn load(&self) -> Result<Vec<Provider>> {
        parse_providers(EMBEDDED_PROVIDERS)
    }
}

/// Dataset source backed by a JSON file on disk.
///
/// Lets an operator replace the built-in directory without rebuilding. The
/// file format is a plain JSON array of provider objects, identical to the
/// embedded `data/providers.json`.
#[derive(Debug, Clone)]
pub struct JsonDataset {
    /// Path to the JSON file on disk.
    path: PathBuf,
}

impl JsonDataset {
    /// Creates a file-backed dataset source. The file is not opened until
    /// [`ProviderSource::load`] is called.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ProviderSource for JsonDataset {
    fn load(&self) -> Result<Vec<Provider>> {
        tracing::debug!(path = ?self.path, "loading provider dataset from file");
        let contents = std::fs::read_to_string(&self.path)?;
        parse_providers(&contents)
    }
}

/// Parses a JSON provider array and validates it.
///
/// Shared by both sources so file-backed datasets get exactly the same
/// validation as the embedded one.
///
/// # Errors
///
/// Returns [`MedidexError::Dataset`] on malformed JSON or failed validation.
pub fn parse_providers(json: &str) -> Result<Vec<Provider>> {
    let providers: Vec<Provider> = serde_json::from_str(json)
        .map_err(|e| MedidexError::Dataset(format!("failed to parse provider JSON: {e}")))?;

    validate(&providers)?;

    tracing::debug!(provider_count = providers.len(), "provider dataset loaded");
    Ok(providers)
}

/// Validates dataset invariants.
///
/// Enforces that provider ids are unique across the set. An empty dataset is
/// accepted: the UI renders its empty state rather than failing.
///
/// # Errors
///
/// Returns [`MedidexError::Dataset`] naming the first duplicated id.
pub fn validate(providers: &[Provider]) -> Result<()> {
    let mut seen = HashSet::with_capacity(providers.len());
    for provider in providers {
        if !seen.insert(provider.id) {
            return Err(MedidexError::Dataset(format!(
                "duplicate provider id {}",
                provider.id
            )));
        }
    }
    Ok(())
}
