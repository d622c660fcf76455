//! MediDex: a terminal directory of rural clinic doctors.
//!
//! Presents a filterable list of provider records alongside a specialty
//! distribution chart and a clinic location map, with a detail popup and
//! `tel:` call handoff per record. All three surfaces derive from one
//! filtered set, recomputed whenever the query, specialty, or view mode
//! changes.
//!
//! # Architecture
//!
//! - [`domain`]: record types and the crate error type
//! - [`dataset`]: loading, validation, and specialty aggregation
//! - [`app`]: state, input modes, and event handling
//! - [`ui`]: themes, view models, and render components
//! - [`observability`]: structured logging to a rotating file
//! - [`infrastructure`]: filesystem path resolution

pub mod app;
pub mod dataset;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::AppState;
use crate::dataset::{EmbeddedDataset, JsonDataset, ProviderSource};
use crate::domain::{MedidexError, Result};
use crate::ui::Theme;

/// Debounce window applied to query keystrokes, in milliseconds.
const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Application configuration, loaded from a TOML file.
///
/// Every field is optional; an absent config file yields the defaults
/// (embedded dataset, built-in theme, info-level logging).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to a providers JSON file. Embedded dataset when unset.
    pub dataset_path: Option<String>,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    pub theme_name: Option<String>,

    /// Path to a custom theme TOML file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `"debug"` or `"medidex=trace"`.
    pub trace_level: Option<String>,

    /// Query debounce window in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl Config {
    /// Loads configuration, preferring an explicit path over the default
    /// location.
    ///
    /// With an explicit path, the file must exist and parse. Without one, the
    /// default `<config dir>/config.toml` is read if present and the defaults
    /// are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MedidexError::Config`] when an explicitly given file is
    /// missing or malformed, or when the default file exists but does not
    /// parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = crate::infrastructure::get_config_dir().join("config.toml");
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`MedidexError::Config`] on read or parse failure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MedidexError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            MedidexError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// The effective debounce window.
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)
    }
}

/// Builds the initial application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and the dataset (configured path or the embedded records), then
/// constructs the state with the full set visible.
///
/// # Errors
///
/// Returns an error when a configured theme or dataset cannot be loaded, or
/// when a named built-in theme does not exist.
pub fn initialize(config: &Config) -> Result<AppState> {
    let theme = resolve_theme(config)?;

    let providers = match &config.dataset_path {
        Some(path) => {
            let path: PathBuf = crate::infrastructure::expand_tilde(path);
            tracing::info!(path = %path.display(), "loading dataset from file");
            JsonDataset::new(path).load()?
        }
        None => EmbeddedDataset.load()?,
    };

    tracing::info!(
        provider_count = providers.len(),
        theme = %theme.name,
        "initialized"
    );

    Ok(AppState::new(providers, theme))
}

fn resolve_theme(config: &Config) -> Result<Theme> {
    if let Some(file) = &config.theme_file {
        return Theme::from_file(crate::infrastructure::expand_tilde(file));
    }
    match &config.theme_name {
        Some(name) => Theme::from_name(name)
            .ok_or_else(|| MedidexError::Theme(format!("unknown built-in theme: {name}"))),
        None => Ok(Theme::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_embedded_dataset_and_default_theme() {
        let config = Config::default();
        assert_eq!(config.debounce_ms(), 200);

        let state = initialize(&config).unwrap();
        assert_eq!(state.providers.len(), 5);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn config_parses_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme_name = \"catppuccin-latte\"\ndebounce_ms = 50\ntrace_level = \"debug\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.debounce_ms(), 50);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no_such_key = true").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MedidexError::Config(_)));
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, MedidexError::Config(_)));
    }

    #[test]
    fn unknown_built_in_theme_is_a_theme_error() {
        let config = Config {
            theme_name: Some("solarized-nope".to_string()),
            ..Config::default()
        };

        let err = initialize(&config).unwrap_err();
        assert!(matches!(err, MedidexError::Theme(_)));
    }

    #[test]
    fn dataset_path_overrides_the_embedded_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 7, "name": "Dr. T. Rao", "specialty": "ENT",
                 "timings": "Mon 09:00-12:00", "phone": "+91-1234",
                 "clinic": "Ear Clinic"}]"#,
        )
        .unwrap();

        let config = Config {
            dataset_path: Some(file.path().display().to_string()),
            ..Config::default()
        };

        let state = initialize(&config).unwrap();
        assert_eq!(state.providers.len(), 1);
        assert_eq!(state.providers[0].name, "Dr. T. Rao");
    }
}
