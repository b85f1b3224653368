//! Theme management and ANSI escape sequence generation.
//!
//! Themes are either built in (Catppuccin variants) or loaded from TOML files.
//! At render time the site's own colors can be layered on top with
//! [`Theme::with_site_colors`].
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
//! price_fg = "#a6e3a1"
//! unavailable_fg = "#f38ba8"
//! chip_active_fg = "#1e1e2e"
//! chip_active_bg = "#89b4fa"
//! lightbox_border = "#cba6f7"
//! ```

use crate::domain::error::{MenuboardError, Result};
use crate::domain::SiteSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Site name color.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, descriptions and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub price_fg: String,
    /// "sold out" marker.
    pub unavailable_fg: String,

    /// Selected category chip.
    pub chip_active_fg: String,
    pub chip_active_bg: String,

    pub lightbox_border: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use menuboard::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
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
    /// [`MenuboardError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            MenuboardError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| MenuboardError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Returns a copy recolored with the site's branding.
    ///
    /// The primary color drives selection, the active chip and prices; the
    /// secondary color the search and lightbox borders; the background color
    /// is used as text on top of the primary color. Values that are not
    /// `#rrggbb` leave the theme's color in place.
    #[must_use]
    pub fn with_site_colors(&self, settings: &SiteSettings) -> Self {
        let mut theme = self.clone();
        let colors = &mut theme.colors;

        if is_hex_color(&settings.primary_color) {
            colors.selection_bg.clone_from(&settings.primary_color);
            colors.chip_active_bg.clone_from(&settings.primary_color);
            colors.price_fg.clone_from(&settings.primary_color);
        }
        if is_hex_color(&settings.secondary_color) {
            colors.search_bar_border.clone_from(&settings.secondary_color);
            colors.lightbox_border.clone_from(&settings.secondary_color);
        }
        if is_hex_color(&settings.background_color) {
            colors.selection_fg.clone_from(&settings.background_color);
            colors.chip_active_fg.clone_from(&settings.background_color);
        }

        theme
    }

    /// Converts a hex color to RGB, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        if !is_hex_color(hex) {
            return (255, 255, 255);
        }
        let hex = hex.trim().trim_start_matches('#');

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use menuboard::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
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

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// `#rrggbb`, with or without the `#`.
fn is_hex_color(value: &str) -> bool {
    let hex = value.trim().trim_start_matches('#');
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

impl Default for Theme {
    /// Catppuccin Mocha.
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
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert!(Theme::from_name("catppuccin-latte").is_some());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let builtin = toml::to_string(&Theme::default()).unwrap();
        let custom = builtin.replace("catppuccin-mocha", "house-style");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "house-style");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(MenuboardError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(MenuboardError::Theme(_))
        ));
    }

    #[test]
    fn site_colors_override_accents() {
        let theme = Theme::default().with_site_colors(&SiteSettings::default());

        assert_eq!(theme.colors.selection_bg, "#3b82f6");
        assert_eq!(theme.colors.chip_active_bg, "#3b82f6");
        assert_eq!(theme.colors.search_bar_border, "#1e40af");
        assert_eq!(theme.colors.selection_fg, "#f8fafc");
        assert_eq!(theme.colors.text_normal, Theme::default().colors.text_normal);
    }

    #[test]
    fn malformed_site_colors_are_ignored() {
        let settings = SiteSettings {
            primary_color: "blue".to_string(),
            secondary_color: "#12345".to_string(),
            ..SiteSettings::default()
        };
        let base = Theme::default();
        let theme = base.with_site_colors(&settings);

        assert_eq!(theme.colors.selection_bg, base.colors.selection_bg);
        assert_eq!(theme.colors.lightbox_border, base.colors.lightbox_border);
        assert_eq!(theme.colors.selection_fg, "#f8fafc");
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nonsense"), "\u{1b}[38;2;255;255;255m");
    }
}
