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

//! Authoring-time catalog errors
//!
//! Navigation itself never fails (every index is clamped). The only defects
//! are content that violates a catalog invariant, and those are reported
//! once, when the content is handed to the core.

use thiserror::Error;

/// A violated catalog invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A step or section catalog with no entries
    #[error("{kind} catalog must contain at least one entry")]
    EmptyCatalog {
        /// What kind of catalog was empty ("step", "section")
        kind: &'static str,
    },
    /// A walkthrough section without a single line note
    #[error("walkthrough section `{section}` has no line notes")]
    EmptyWalkthrough {
        /// Label of the offending section
        section: String,
    },
    /// A line group without notes
    #[error("line group `{group}` in section `{section}` is empty")]
    EmptyLineGroup {
        /// Label of the section owning the group
        section: String,
        /// Title of the empty group
        group: String,
    },
}
