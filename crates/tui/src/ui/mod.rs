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


//! UI utilities and visual components
//!
//! Reusable pieces of the screen chrome: color schemes, borders, icons,
//! the status bar and the help overlay.

pub mod borders;
pub mod colors;
pub mod help;
pub mod icons;
pub mod status;

pub use borders::{BorderPresets, BoxGlyphs, EnhancedBorder, EnhancedBorderStyle};
pub use colors::{ColorScheme, Theme};
pub use help::HelpOverlay;
pub use icons::Icons;
pub use status::{StatusBar, StepStatus};
