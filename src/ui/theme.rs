//! Theme management and color resolution.
//!
//! This module defines the color scheme system for the directory UI,
//! supporting both built-in themes (Catppuccin variants) and custom themes
//! loaded from TOML files. Hex color strings are resolved to RGB terminal
//! colors at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! badge_fg = "#cba6f7"
//! tele_fg = "#a6e3a1"
//! phone_fg = "#89dceb"
//! map_marker_fg = "#f38ba8"
//! chart_palette = ["#89b4fa", "#a6e3a1"]
//! ```

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{MedidexError, Result};

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Specialty badge color.
    pub badge_fg: String,
    /// Teleconsultation indicator color.
    pub tele_fg: String,
    /// Phone number color.
    pub phone_fg: String,
    /// Map marker color.
    pub map_marker_fg: String,

    /// Chart bar colors, cycled across specialties.
    pub chart_palette: Vec<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MedidexError::Io`] if the file cannot be read and
    /// [`MedidexError::Theme`] if the TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| MedidexError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves a hex color string to a terminal RGB color.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns white on parse errors.
    #[must_use]
    pub fn color(hex: &str) -> Color {
        let (r, g, b) = Self::hex_to_rgb(hex);
        Color::Rgb(r, g, b)
    }

    /// Returns the chart color for a bar index, cycling through the palette.
    /// Falls back to white when the palette is empty.
    #[must_use]
    pub fn chart_color(&self, index: usize) -> Color {
        if self.colors.chart_palette.is_empty() {
            return Color::White;
        }
        Self::color(&self.colors.chart_palette[index % self.colors.chart_palette.len()])
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn hex_colors_resolve_to_rgb() {
        assert_eq!(Theme::color("#cdd6f4"), Color::Rgb(0xcd, 0xd6, 0xf4));
        assert_eq!(Theme::color("cdd6f4"), Color::Rgb(0xcd, 0xd6, 0xf4));
        // Malformed input falls back to white rather than failing a frame.
        assert_eq!(Theme::color("#xyz"), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn chart_palette_cycles() {
        let theme = Theme::default();
        let n = theme.colors.chart_palette.len();
        assert_eq!(theme.chart_color(0), theme.chart_color(n));
    }

    #[test]
    fn theme_loads_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/catppuccin-latte.toml").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-latte");
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MedidexError::Theme(_)));
    }
}
