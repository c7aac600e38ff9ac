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


//! Unicode icons and symbols for visual enhancement

/// Collection of Unicode icons used throughout the TUI
#[derive(Debug, Clone)]
pub struct Icons;

impl Icons {
    // Entries
    /// Chevron of a collapsed line explanation
    pub const COLLAPSED: &'static str = "▸";
    /// Chevron of an expanded line explanation
    pub const EXPANDED: &'static str = "▾";
    /// Prefix of the plain-language explanation
    pub const PLAIN_ENGLISH: &'static str = "📖";
    /// Prefix of the memory-level explanation
    pub const RUNTIME: &'static str = "🧠";
    /// Marker in front of the focused entry
    pub const FOCUS: &'static str = "❯";

    // Navigation
    /// Up arrow for scrolling
    pub const ARROW_UP: &'static str = "↑";
    /// Down arrow for scrolling
    pub const ARROW_DOWN: &'static str = "↓";

    // Pager dots
    /// Dot of the active section
    pub const DOT_ACTIVE: &'static str = "●";
    /// Dot of any other section
    pub const DOT_INACTIVE: &'static str = "○";

    // Misc
    /// Help overlay title
    pub const HELP: &'static str = "❓";
    /// Theme indicator in the status bar
    pub const THEME: &'static str = "🎨";
}
