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

//! MemLab Common - Shared functionality for MemLab components
//!
//! This crate provides utilities shared by the content, core and terminal
//! crates. At the moment that is the logging setup.

/// Logging setup and utilities for consistent logging across MemLab components
pub mod logging;

pub use logging::*;
