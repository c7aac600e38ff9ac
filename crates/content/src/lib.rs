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

//! MemLab Content - authored lessons
//!
//! The core crate never parses anything: lessons are either built in Rust
//! ([`factory_lesson`]) or read from TOML files by the loader in this crate.

mod blocks;
mod error;
pub mod factory;
mod loader;

pub use error::ContentError;
pub use factory::factory_lesson;
pub use loader::{from_toml_str, load_from_path, to_toml_string};
