//! Filesystem path resolution for config and data locations.
//!
//! Follows the XDG base directory convention: config under
//! `$XDG_CONFIG_HOME/medidex` and data (logs) under
//! `$XDG_DATA_HOME/medidex`, with the usual home-relative fallbacks when the
//! environment variables are unset.

use std::path::PathBuf;

/// Returns the data directory used for log files.
///
/// `$XDG_DATA_HOME/medidex` when set, otherwise `~/.local/share/medidex`.
/// Falls back to the current directory when no home can be resolved.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_DATA_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir).join("medidex");
        }
    }
    home_dir()
        .map(|home| home.join(".local").join("share").join("medidex"))
        .unwrap_or_else(|| PathBuf::from(".").join("medidex"))
}

/// Returns the config directory searched for `config.toml`.
///
/// `$XDG_CONFIG_HOME/medidex` when set, otherwise `~/.config/medidex`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir).join("medidex");
        }
    }
    home_dir()
        .map(|home| home.join(".config").join("medidex"))
        .unwrap_or_else(|| PathBuf::from(".").join("medidex"))
}

/// Expands a leading tilde against the user's home directory.
///
/// Paths without a tilde pass through unchanged, as do tilde paths when no
/// home directory can be resolved.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match home_dir() {
        Some(home) => expand_tilde_with(path, &home),
        None => PathBuf::from(path),
    }
}

/// Tilde expansion against an explicit home directory.
#[must_use]
pub fn expand_tilde_with(path: &str, home: &std::path::Path) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else if path == "~" {
        home.to_path_buf()
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
