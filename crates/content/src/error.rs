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

use memlab_core::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading authored content
#[derive(Debug, Error)]
pub enum ContentError {
    /// The lesson file could not be read
    #[error("failed to read lesson file {path}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The lesson file is not valid TOML or does not match the lesson schema
    #[error("failed to parse lesson: {0}")]
    Toml(#[from] toml::de::Error),

    /// The lesson could not be written as TOML
    #[error("failed to serialize lesson: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The lesson parsed but breaks an authoring rule
    #[error("invalid lesson: {0}")]
    Catalog(#[from] CatalogError),
}
