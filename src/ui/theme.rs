//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents: a few are compiled in, and a custom one can be
//! loaded from a file named by the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `neon-night`: Dark theme with pink and cyan accents (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f5e0ff"
//! selection_fg = "#0d0221"
//! selection_bg = "#ff2a6d"
//! text_normal = "#e0e0ff"
//! text_dim = "#6b6b8f"
//! border = "#2d1b4e"
//! search_bar_border = "#05d9e8"
//! match_highlight_fg = "#0d0221"
//! match_highlight_bg = "#f9f871"
//! empty_state_fg = "#05d9e8"
//! accent = "#c77dff"
//! like_fg = "#ff2a6d"
//! saved_fg = "#c77dff"
//! unread_fg = "#05d9e8"
//! online_fg = "#39ff14"
//! warning_fg = "#ffb347"
//! ```
//!
//! # Example
//!
//! ```
//! use neonfeed::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! assert_eq!(theme.name, "catppuccin-mocha");
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! ```

use crate::domain::{NeonfeedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "neon-night";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings ("#ff2a6d").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, metadata and secondary lines.
    pub text_dim: String,

    pub border: String,

    /// Input box border.
    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Active tabs, emphasized rows and banner headings.
    pub accent: String,

    /// Liked marker.
    pub like_fg: String,
    /// Saved and following markers.
    pub saved_fg: String,
    /// Unread marker and nav badges.
    pub unread_fg: String,
    /// Online marker and success banners.
    pub online_fg: String,
    /// Sensitive-content marker and warning banners.
    pub warning_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the compiled-in themes.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "neon-night" => include_str!("../../themes/neon-night.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!(theme = name, error = %err, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NeonfeedError::Theme`] if the file cannot be read or its
    /// contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NeonfeedError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| NeonfeedError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the default TOML cannot be parsed.
    fn fallback() -> Self {
        let c = |s: &str| s.to_string();
        Self {
            name: c(DEFAULT_THEME),
            colors: ThemeColors {
                header_fg: c("#f5e0ff"),
                header_bg: None,
                selection_fg: c("#0d0221"),
                selection_bg: c("#ff2a6d"),
                text_normal: c("#e0e0ff"),
                text_dim: c("#6b6b8f"),
                border: c("#2d1b4e"),
                search_bar_border: c("#05d9e8"),
                match_highlight_fg: c("#0d0221"),
                match_highlight_bg: c("#f9f871"),
                empty_state_fg: c("#05d9e8"),
                accent: c("#c77dff"),
                like_fg: c("#ff2a6d"),
                saved_fg: c("#c77dff"),
                unread_fg: c("#05d9e8"),
                online_fg: c("#39ff14"),
                warning_fg: c("#ffb347"),
            },
        }
    }
}

impl Default for Theme {
    /// The `neon-night` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in ["neon-night", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_matches_embedded_neon_night() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("123"), "\u{1b}[48;2;255;255;255m");
    }
}
