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

//! Expandable line explanations
//!
//! Entries are independent toggles, not an accordion: any number of them may
//! be open at once and toggling one never touches another.

use crate::navigation::Cursor;
use std::num::NonZeroUsize;

/// One collapsible explanation, collapsed by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandableEntry {
    expanded: bool,
}

impl ExpandableEntry {
    /// A collapsed entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the entry; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Whether the explanation is shown
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Mounted state of a walkthrough section
///
/// Holds one [`ExpandableEntry`] per line note (flat index across groups)
/// and a focus cursor for hosts without pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    entries: Vec<ExpandableEntry>,
    focus: Cursor,
}

impl Walkthrough {
    /// `count` collapsed entries, focus on the first
    pub fn new(count: usize) -> Self {
        let len = NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN);
        Self { entries: vec![ExpandableEntry::new(); count], focus: Cursor::new(len) }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `index`, if in range
    pub fn entry(&self, index: usize) -> Option<&ExpandableEntry> {
        self.entries.get(index)
    }

    /// Whether entry `index` is expanded; false when out of range
    pub fn is_expanded(&self, index: usize) -> bool {
        self.entry(index).is_some_and(ExpandableEntry::is_expanded)
    }

    /// Toggle entry `index`; returns false (and does nothing) when out of range
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.toggle();
                true
            }
            None => false,
        }
    }

    /// Index of the focused entry
    pub fn focused(&self) -> usize {
        self.focus.index()
    }

    /// Move focus down; returns whether it moved
    pub fn focus_next(&mut self) -> bool {
        self.focus.next()
    }

    /// Move focus up; returns whether it moved
    pub fn focus_previous(&mut self) -> bool {
        self.focus.previous()
    }

    /// Toggle the focused entry
    pub fn toggle_focused(&mut self) -> bool {
        self.toggle(self.focus.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut entry = ExpandableEntry::new();

        assert!(!entry.is_expanded());
        assert!(entry.toggle());
        assert!(!entry.toggle());
        assert!(entry.toggle());
        assert!(entry.is_expanded());
    }

    #[test]
    fn test_entries_are_independent() {
        let mut walkthrough = Walkthrough::new(3);

        assert!(walkthrough.toggle(0));
        assert!(walkthrough.toggle(2));

        assert!(walkthrough.is_expanded(0));
        assert!(!walkthrough.is_expanded(1));
        assert!(walkthrough.is_expanded(2));
    }

    #[test]
    fn test_out_of_range_toggle_is_noop() {
        let mut walkthrough = Walkthrough::new(2);

        assert!(!walkthrough.toggle(2));
        assert!(!walkthrough.is_expanded(2));
        assert_eq!(walkthrough.entry(2), None);
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut walkthrough = Walkthrough::new(2);

        assert!(!walkthrough.focus_previous());
        assert!(walkthrough.focus_next());
        assert!(!walkthrough.focus_next());
        assert_eq!(walkthrough.focused(), 1);

        assert!(walkthrough.toggle_focused());
        assert!(walkthrough.is_expanded(1));
        assert!(!walkthrough.is_expanded(0));
    }
}
