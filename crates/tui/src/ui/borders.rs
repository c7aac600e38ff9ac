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


//! Enhanced border system with Unicode box-drawing characters
//!
//! [`EnhancedBorder`] builds ratatui blocks for the screen chrome. Panels
//! inside the lesson body are painted as text lines, so each style also
//! exposes its raw [`BoxGlyphs`].

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

/// Enhanced border styles for panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancedBorderStyle {
    /// Standard rounded corners
    Rounded,
    /// Double-line borders for emphasis
    Double,
    /// Thick borders for high priority panels
    Thick,
    /// Classic square borders
    Square,
}

/// The six characters a box is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    /// Top-left corner
    pub top_left: char,
    /// Top-right corner
    pub top_right: char,
    /// Bottom-left corner
    pub bottom_left: char,
    /// Bottom-right corner
    pub bottom_right: char,
    /// Horizontal edge
    pub horizontal: char,
    /// Vertical edge
    pub vertical: char,
}

impl EnhancedBorderStyle {
    /// Box-drawing characters for this style
    pub fn glyphs(&self) -> BoxGlyphs {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Self::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
            Self::Square => ('┌', '┐', '└', '┘', '─', '│'),
        };
        BoxGlyphs { top_left, top_right, bottom_left, bottom_right, horizontal, vertical }
    }

    fn border_type(&self) -> BorderType {
        match self {
            Self::Rounded => BorderType::Rounded,
            Self::Double => BorderType::Double,
            Self::Thick => BorderType::Thick,
            Self::Square => BorderType::Plain,
        }
    }
}

/// Enhanced border builder for panels
#[derive(Debug, Clone)]
pub struct EnhancedBorder {
    style: EnhancedBorderStyle,
    focused: bool,
    title: Option<String>,
    focused_color: Color,
    unfocused_color: Color,
}

impl EnhancedBorder {
    /// Create a new enhanced border
    pub fn new(style: EnhancedBorderStyle) -> Self {
        Self {
            style,
            focused: false,
            title: None,
            focused_color: Color::Cyan,
            unfocused_color: Color::Gray,
        }
    }

    /// Set focus state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set border title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set focused border color
    pub fn focused_color(mut self, color: Color) -> Self {
        self.focused_color = color;
        self
    }

    /// Set unfocused border color
    pub fn unfocused_color(mut self, color: Color) -> Self {
        self.unfocused_color = color;
        self
    }

    /// Build the Block widget
    pub fn build(self) -> Block<'static> {
        let border_color = if self.focused { self.focused_color } else { self.unfocused_color };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.style.border_type())
            .border_style(Style::default().fg(border_color));

        if let Some(title) = self.title {
            let mut title_style = Style::default().fg(border_color);
            if self.focused {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }
            block = block.title(ratatui::text::Span::styled(format!(" {title} "), title_style));
        }

        block
    }
}

/// Convenience functions for common border styles
impl EnhancedBorder {
    /// Create a rounded border (most common style)
    pub fn rounded() -> Self {
        Self::new(EnhancedBorderStyle::Rounded)
    }

    /// Create a double-line border for emphasis
    pub fn double() -> Self {
        Self::new(EnhancedBorderStyle::Double)
    }
}

/// Border presets for the screen chrome
pub struct BorderPresets;

impl BorderPresets {
    /// Lesson body border, titled with the active section
    pub fn body(
        focused: bool,
        title: String,
        focused_color: Color,
        unfocused_color: Color,
    ) -> Block<'static> {
        EnhancedBorder::rounded()
            .focused(focused)
            .title(title)
            .focused_color(focused_color)
            .unfocused_color(unfocused_color)
            .build()
    }

    /// Help overlay border
    pub fn help(title: String, focused_color: Color) -> Block<'static> {
        EnhancedBorder::double().focused(true).title(title).focused_color(focused_color).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_match_style() {
        assert_eq!(EnhancedBorderStyle::Rounded.glyphs().top_left, '╭');
        assert_eq!(EnhancedBorderStyle::Double.glyphs().vertical, '║');
        assert_eq!(EnhancedBorderStyle::Thick.glyphs().horizontal, '━');
        assert_eq!(EnhancedBorderStyle::Square.glyphs().bottom_right, '┘');
    }
}
