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

//! MemLab Core - the presentation state machine
//!
//! This crate holds everything in MemLab that has state or transition logic:
//!
//! - [`catalog`]: the authored, immutable content (sections and memory steps)
//! - [`navigation`]: bounded index navigation ([`StepPlayer`], [`SectionNavigator`])
//! - [`entry`]: independently expandable line explanations
//! - [`session`]: the [`Viewer`] that composes the navigators and applies [`Input`]s
//! - [`view`]: the pure view composer producing a host-agnostic render tree
//!
//! Rendering hosts (the terminal UI, the JSON dump) only ever consume
//! [`view::compose`] output and feed [`Input`]s back into the [`Viewer`].

pub mod catalog;
pub mod entry;
pub mod error;
pub mod navigation;
pub mod session;
pub mod view;

pub use catalog::{
    Accent, Block, Card, Catalog, CatalogItem, Frame, HeapObject, KeyInsight, Lesson, LineGroup,
    LineNote, Local, LocalValue, PanelLabels, Scenario, SectionBody, SectionCatalog,
    SectionDescriptor, StaticPage, StepCatalog, StepRecord, Tone, WalkthroughPage,
};
pub use entry::{ExpandableEntry, Walkthrough};
pub use error::CatalogError;
pub use navigation::{Cursor, Navigator, SectionNavigator, StepPlayer};
pub use session::{Input, InputOutcome, RemountPolicy, SectionState, Viewer};
pub use view::{compose, Button, EntryDetail, EntryView, Header, Node, Pager, Panel, PanelId, View};
