//! Color scheme and ANSI escape sequence generation.
//!
//! The default theme is built in. A custom theme can be loaded from a TOML
//! file; any color left out falls back to the default.
//!
//! # TOML Format
//!
//! ```toml
//! name = "paper"
//!
//! [colors]
//! header_fg = "#1e66f5"
//! text_dim = "#8c8fa1"
//! match_highlight_bg = "#df8e1d"
//! ```

use crate::domain::error::{AlbumSearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeColors {
    pub header_fg: String,
    pub text_normal: String,
    pub text_dim: String,
    pub border: String,
    pub spinner_fg: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,
    pub empty_state_fg: String,
    pub snack_bar_fg: String,
    pub snack_bar_bg: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            header_fg: "#cdd6f4".to_string(),
            text_normal: "#cdd6f4".to_string(),
            text_dim: "#6c7086".to_string(),
            border: "#45475a".to_string(),
            spinner_fg: "#89b4fa".to_string(),
            match_highlight_fg: "#1e1e2e".to_string(),
            match_highlight_bg: "#f9e2af".to_string(),
            empty_state_fg: "#89b4fa".to_string(),
            snack_bar_fg: "#1e1e2e".to_string(),
            snack_bar_bg: "#f38ba8".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        }
    }
}

impl Theme {
    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AlbumSearchError::Io`] if the file cannot be read and
    /// [`AlbumSearchError::Config`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| AlbumSearchError::Config(format!("failed to parse theme TOML: {e}")))
    }

    /// Foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

/// Parses `#rrggbb`; anything malformed renders white.
fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return (255, 255, 255);
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => (255, 255, 255),
    }
}
