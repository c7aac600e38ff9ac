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

//! Bounded index navigation
//!
//! A [`Cursor`] is the navigation state shared by every navigator: an index
//! into a non-empty sequence. Every jump is clamped into range, so there is
//! no such thing as an invalid navigation request. "Next" and "previous" are
//! jumps by one and inherit the clamp, which makes them no-ops at the ends.

use crate::catalog::{Catalog, SectionDescriptor, StepRecord};
use std::num::NonZeroUsize;

/// Index into a sequence of `len` entries, always `< len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    len: NonZeroUsize,
    index: usize,
}

impl Cursor {
    /// A cursor at index 0
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, index: 0 }
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the underlying sequence
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Highest valid index
    pub fn last(&self) -> usize {
        self.len.get() - 1
    }

    /// Move to `clamp(target, 0, len - 1)`; returns whether the index changed
    pub fn jump_to(&mut self, target: i64) -> bool {
        let clamped = if target < 0 {
            0
        } else {
            usize::try_from(target).map_or(self.last(), |target| target.min(self.last()))
        };
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }

    /// `jump_to(index + 1)`
    pub fn next(&mut self) -> bool {
        self.jump_to(self.signed_index().saturating_add(1))
    }

    /// `jump_to(index - 1)`
    pub fn previous(&mut self) -> bool {
        self.jump_to(self.signed_index().saturating_sub(1))
    }

    /// True iff at index 0
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True iff at the last index
    pub fn is_last(&self) -> bool {
        self.index == self.last()
    }

    fn signed_index(&self) -> i64 {
        i64::try_from(self.index).unwrap_or(i64::MAX)
    }
}

/// A cursor bound to the catalog it navigates
///
/// The catalog is never mutated; [`Navigator::current`] hands out a
/// read-only view of the selected entry.
#[derive(Debug, Clone)]
pub struct Navigator<T> {
    catalog: Catalog<T>,
    cursor: Cursor,
}

/// Current step of one memory scenario
pub type StepPlayer = Navigator<StepRecord>;

/// Current top-level section of a lesson
///
/// `is_first`/`is_last` are advisory: hosts use them to disable their
/// previous/next controls, but calling `previous`/`next` at a boundary is
/// still a safe no-op.
pub type SectionNavigator = Navigator<SectionDescriptor>;

impl<T> Navigator<T> {
    /// A navigator positioned at index 0
    pub fn new(catalog: Catalog<T>) -> Self {
        let cursor = Cursor::new(catalog.len());
        Self { catalog, cursor }
    }

    /// Select `clamp(target, 0, len - 1)`; returns whether the selection changed
    pub fn jump_to(&mut self, target: i64) -> bool {
        self.cursor.jump_to(target)
    }

    /// Select the following entry, if any
    pub fn next(&mut self) -> bool {
        self.cursor.next()
    }

    /// Select the preceding entry, if any
    pub fn previous(&mut self) -> bool {
        self.cursor.previous()
    }

    /// The selected entry
    pub fn current(&self) -> &T {
        &self.catalog[self.cursor.index()]
    }

    /// Index of the selected entry
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Number of entries
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// True iff the first entry is selected
    pub fn is_first(&self) -> bool {
        self.cursor.is_first()
    }

    /// True iff the last entry is selected
    pub fn is_last(&self) -> bool {
        self.cursor.is_last()
    }

    /// The navigated catalog
    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }
}
