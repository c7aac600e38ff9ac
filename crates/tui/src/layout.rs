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


//! Adaptive layout management
//!
//! The body is painted at the terminal's width. How wide that is decides
//! whether side-by-side panels (the stack, heap and loaded units of a memory
//! step) stay side by side or stack vertically, and how much of each section
//! tab fits.

/// Narrowest column a side-by-side panel may be squeezed into
pub const MIN_COLUMN_WIDTH: u16 = 16;

/// Layout types for different terminal sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutType {
    /// Panels side by side, full tab labels (≥120 columns)
    Full,
    /// Panels side by side, short tab labels (80-119 columns)
    Compact,
    /// Panels stacked, icon-only tabs (<80 columns)
    Mobile,
}

impl LayoutType {
    /// Name shown in the status bar and help title
    pub fn name(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Compact => "Compact",
            Self::Mobile => "Mobile",
        }
    }
}

/// Layout manager for responsive design
#[derive(Debug)]
pub struct LayoutManager {
    current_layout: LayoutType,
    terminal_width: u16,
    terminal_height: u16,
}

impl LayoutManager {
    /// Create a new layout manager with default values
    pub fn new() -> Self {
        Self { current_layout: LayoutType::Compact, terminal_width: 80, terminal_height: 24 }
    }

    /// Update terminal dimensions and recalculate layout
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.current_layout = self.calculate_layout_type();
    }

    fn calculate_layout_type(&self) -> LayoutType {
        if self.terminal_width >= 120 {
            LayoutType::Full
        } else if self.terminal_width >= 80 {
            LayoutType::Compact
        } else {
            LayoutType::Mobile
        }
    }

    /// Get current layout type
    pub fn layout_type(&self) -> LayoutType {
        self.current_layout
    }

    /// Get current terminal width
    pub fn width(&self) -> u16 {
        self.terminal_width
    }

    /// Get current terminal height
    pub fn height(&self) -> u16 {
        self.terminal_height
    }

    /// Check if current layout supports multiple visible panels
    pub fn supports_multiple_panels(&self) -> bool {
        matches!(self.current_layout, LayoutType::Full | LayoutType::Compact)
    }

    /// Whether a row of `columns` panels fits in `width` cells side by side
    pub fn fits_side_by_side(&self, columns: usize, width: u16) -> bool {
        if !self.supports_multiple_panels() || columns == 0 {
            return columns <= 1;
        }
        let columns = u16::try_from(columns).unwrap_or(u16::MAX);
        let gaps = columns.saturating_sub(1);
        width.saturating_sub(gaps) / columns >= MIN_COLUMN_WIDTH
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}
