// MemLab - Memory Step Lab
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Color schemes and theming system
//!
//! Every accent the lesson content names maps to a concrete terminal color
//! here, so content never carries colors of its own.

use memlab_core::Accent;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Semantic color mapping for consistent theming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    // Base
    /// Body text
    pub text: Color,
    /// Secondary text
    pub dim: Color,
    /// Screen background
    pub background: Color,

    // Accents
    /// Main accent
    pub primary: Color,
    /// Pink accent
    pub pink: Color,
    /// Yellow accent
    pub yellow: Color,
    /// Blue accent
    pub blue: Color,
    /// Purple accent
    pub purple: Color,

    // Borders
    /// Unfocused borders
    pub border: Color,
    /// Focused borders
    pub focused_border: Color,

    // Interactive elements
    /// Background of selected and focused items
    pub selection_bg: Color,
    /// Controls that would do nothing
    pub disabled: Color,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar text
    pub status_fg: Color,
}

impl ColorScheme {
    /// Terminal color of a content accent
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Primary => self.primary,
            Accent::Pink => self.pink,
            Accent::Yellow => self.yellow,
            Accent::Blue => self.blue,
            Accent::Purple => self.purple,
            Accent::Muted => self.dim,
        }
    }
}

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Deep navy background with neon accents
    #[default]
    Midnight,
    /// The terminal's own 16-color palette
    Terminal,
    /// High contrast theme for accessibility
    HighContrast,
}

impl Theme {
    /// Get all available themes
    pub fn all() -> &'static [Self] {
        &[Self::Midnight, Self::Terminal, Self::HighContrast]
    }

    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Terminal => "terminal",
            Self::HighContrast => "high_contrast",
        }
    }

    /// Get theme description for display
    pub fn description(&self) -> &'static str {
        match self {
            Self::Midnight => "Midnight",
            Self::Terminal => "Terminal",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Get the next theme in the cycle
    pub fn next(&self) -> Self {
        match self {
            Self::Midnight => Self::Terminal,
            Self::Terminal => Self::HighContrast,
            Self::HighContrast => Self::Midnight,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all().iter().copied().find(|theme| theme.name() == wanted).ok_or_else(|| {
            let names: Vec<_> = Self::all().iter().map(Theme::name).collect();
            format!("unknown theme '{s}' (expected one of: {})", names.join(", "))
        })
    }
}

impl From<Theme> for ColorScheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Midnight => midnight(),
            Theme::Terminal => terminal(),
            Theme::HighContrast => high_contrast(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Theme::default().into()
    }
}

/// Midnight theme, the lesson's own palette
fn midnight() -> ColorScheme {
    ColorScheme {
        text: Color::Rgb(216, 220, 230),       // #d8dce6
        dim: Color::Rgb(107, 115, 148),        // #6b7394
        background: Color::Rgb(11, 11, 26),    // #0b0b1a
        primary: Color::Rgb(0, 229, 160),      // #00e5a0
        pink: Color::Rgb(255, 77, 141),        // #ff4d8d
        yellow: Color::Rgb(255, 194, 68),      // #ffc244
        blue: Color::Rgb(91, 157, 255),        // #5b9dff
        purple: Color::Rgb(176, 125, 255),     // #b07dff
        border: Color::Rgb(30, 30, 64),        // #1e1e40
        focused_border: Color::Rgb(0, 229, 160),
        selection_bg: Color::Rgb(26, 16, 64),  // #1a1040
        disabled: Color::Rgb(60, 64, 90),
        status_bg: Color::Rgb(13, 13, 36),     // #0d0d24
        status_fg: Color::Rgb(107, 115, 148),
    }
}

/// Named ANSI colors only, follows the user's terminal palette
fn terminal() -> ColorScheme {
    ColorScheme {
        text: Color::Reset,
        dim: Color::DarkGray,
        background: Color::Reset,
        primary: Color::Green,
        pink: Color::Magenta,
        yellow: Color::Yellow,
        blue: Color::Blue,
        purple: Color::LightMagenta,
        border: Color::DarkGray,
        focused_border: Color::Green,
        selection_bg: Color::DarkGray,
        disabled: Color::DarkGray,
        status_bg: Color::DarkGray,
        status_fg: Color::White,
    }
}

/// High contrast theme for accessibility
fn high_contrast() -> ColorScheme {
    ColorScheme {
        text: Color::Rgb(255, 255, 255),
        dim: Color::Rgb(192, 192, 192),
        background: Color::Rgb(0, 0, 0),
        primary: Color::Rgb(0, 255, 0),
        pink: Color::Rgb(255, 0, 255),
        yellow: Color::Rgb(255, 255, 0),
        blue: Color::Rgb(0, 255, 255),
        purple: Color::Rgb(255, 128, 255),
        border: Color::Rgb(255, 255, 255),
        focused_border: Color::Rgb(255, 255, 0),
        selection_bg: Color::Rgb(255, 255, 255),
        disabled: Color::Rgb(128, 128, 128),
        status_bg: Color::Rgb(255, 255, 255),
        status_fg: Color::Rgb(0, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Midnight.next(), Theme::Terminal);
        assert_eq!(Theme::Terminal.next(), Theme::HighContrast);
        assert_eq!(Theme::HighContrast.next(), Theme::Midnight);
    }

    #[test]
    fn test_theme_names_parse_back() {
        for theme in Theme::all() {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), *theme);
        }
        assert_eq!("High-Contrast".parse::<Theme>().unwrap(), Theme::HighContrast);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_accents_are_distinct() {
        let scheme: ColorScheme = Theme::Midnight.into();
        let accents = [Accent::Primary, Accent::Pink, Accent::Yellow, Accent::Blue, Accent::Purple];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(scheme.accent(*a), scheme.accent(*b));
            }
        }
        assert_eq!(scheme.accent(Accent::Muted), scheme.dim);
    }
}
