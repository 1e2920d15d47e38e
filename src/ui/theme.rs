//! Color themes and ANSI escape sequence generation.
//!
//! Themes are TOML palettes. Four Catppuccin flavours are compiled in; a custom
//! palette can be loaded from a file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//! - `catppuccin-frappe`: cool dark
//! - `catppuccin-macchiato`: warm dark
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
//! focus_border = "#89b4fa"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! selected_marker_fg = "#a6e3a1"
//! dial_code_fg = "#fab387"
//! disabled_fg = "#585b70"
//! ```
//!
//! # Example
//!
//! ```rust
//! use flagdial::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}+44{}", Theme::fg(&theme.colors.dial_code_fg), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{FlagdialError, Result};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colors for every UI element.
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Foreground of the row under the keyboard cursor.
    pub selection_fg: String,
    /// Background of the row under the keyboard cursor.
    pub selection_bg: String,

    /// Normal text.
    pub text_normal: String,
    /// Placeholders, footer and other secondary text.
    pub text_dim: String,

    /// Separator lines and unfocused frames.
    pub border: String,
    /// Frame of the focused trigger or number input.
    pub focus_border: String,

    /// Search box frame.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// "No countries found" message.
    pub empty_state_fg: String,

    /// Marker in front of the currently selected country.
    pub selected_marker_fg: String,

    /// Dial codes in the trigger and the list.
    pub dial_code_fg: String,

    /// Everything while the widget is disabled.
    pub disabled_fg: String,
}

impl Theme {
    /// Looks up a built-in theme.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FlagdialError::Io`] when the file cannot be read and
    /// [`FlagdialError::Theme`] when it is not a valid palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| FlagdialError::Theme(e.to_string()))
    }

    /// Parses `hex` into RGB; anything malformed becomes white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in palette fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn escapes_from_hex() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/catppuccin-frappe.toml").replace("catppuccin-frappe", "mine");
        file.write_all(source.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(FlagdialError::Theme(_))));
    }
}
