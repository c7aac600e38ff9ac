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

//! Authored content catalogs
//!
//! Everything in this module is immutable once constructed. Step and section
//! catalogs are shared, non-empty sequences; a catalog handle is cheap to
//! clone and every navigator keeps its own handle.

use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, num::NonZeroUsize, ops::Index, sync::Arc};

/// Palette key attached to authored content
///
/// The core never deals in concrete colors; rendering hosts map each key to
/// whatever their theme says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// The lesson's main accent
    #[default]
    Primary,
    /// Pink highlight
    Pink,
    /// Yellow highlight
    Yellow,
    /// Blue highlight
    Blue,
    /// Purple highlight
    Purple,
    /// De-emphasized content
    Muted,
}

/// Text emphasis for static paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Regular body text
    #[default]
    Normal,
    /// Bold text
    Strong,
    /// Dimmed text
    Muted,
    /// Monospaced text (code, addresses)
    Mono,
}

/// Value held by a local variable slot of a stack frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalValue {
    /// A plain value, shown as `name = value`
    Value(String),
    /// A reference to a heap object or type, shown as `name → target`
    Reference(String),
    /// A declared but not yet assigned slot
    Unset,
}

/// One named local of a stack frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Local {
    /// Variable name
    pub name: String,
    /// Current value
    pub value: LocalValue,
}

impl Local {
    /// A local holding a plain value
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: LocalValue::Value(value.into()) }
    }

    /// A local holding a reference
    pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self { name: name.into(), value: LocalValue::Reference(target.into()) }
    }

    /// A local that has not been assigned yet
    pub fn unset(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: LocalValue::Unset }
    }
}

impl fmt::Display for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LocalValue::Value(value) => write!(f, "{} = {}", self.name, value),
            LocalValue::Reference(target) => write!(f, "{} → {}", self.name, target),
            LocalValue::Unset => write!(f, "{} = (not set yet)", self.name),
        }
    }
}

/// A stack frame as shown in one memory step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame label, e.g. `main() frame`
    pub label: String,
    /// Palette key for the frame box
    #[serde(default)]
    pub accent: Accent,
    /// Locals in declaration order
    #[serde(default)]
    pub locals: Vec<Local>,
}

impl Frame {
    /// A frame without locals
    pub fn new(label: impl Into<String>, accent: Accent) -> Self {
        Self { label: label.into(), accent, locals: Vec::new() }
    }

    /// Append a local
    pub fn with_local(mut self, local: Local) -> Self {
        self.locals.push(local);
        self
    }
}

/// An object living on the conceptual heap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapObject {
    /// Opaque address label such as `0x2000`; not a real pointer
    pub address: String,
    /// What the object is
    pub type_label: String,
    /// Palette key for the object box
    #[serde(default)]
    pub accent: Accent,
    /// Whether this step allocated the object
    #[serde(default)]
    pub fresh: bool,
}

impl HeapObject {
    /// An object that already existed before the step
    pub fn new(address: impl Into<String>, type_label: impl Into<String>, accent: Accent) -> Self {
        Self { address: address.into(), type_label: type_label.into(), accent, fresh: false }
    }

    /// Mark the object as allocated by this step
    pub fn fresh(mut self) -> Self {
        self.fresh = true;
        self
    }
}

/// The optional "key insight" callout of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInsight {
    /// Callout headline
    pub title: String,
    /// Callout body, one entry per line
    #[serde(default)]
    pub body: Vec<String>,
    /// Palette key for the callout
    #[serde(default)]
    pub accent: Accent,
}

/// One memory step: a complete snapshot of stack, heap and loaded units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step headline
    pub title: String,
    /// What happens in this step
    pub description: String,
    /// Stack frames, the most recently pushed frame first
    #[serde(default)]
    pub stack_frames: Vec<Frame>,
    /// Heap objects in allocation order
    #[serde(default)]
    pub heap_objects: Vec<HeapObject>,
    /// Units (classes, interfaces) resident in the metadata area
    #[serde(default)]
    pub loaded_units: Vec<String>,
    /// Reference and relationship call-outs
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Optional callout attached to this step only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<KeyInsight>,
}

/// Item types that can live in a [`Catalog`]
pub trait CatalogItem {
    /// Human readable catalog kind used in error messages
    const KIND: &'static str;
}

impl CatalogItem for StepRecord {
    const KIND: &'static str = "step";
}

impl CatalogItem for SectionDescriptor {
    const KIND: &'static str = "section";
}

/// A fixed-length, non-empty, immutable and shared sequence
///
/// Indices run over `0..len()`. Cloning only bumps a reference count.
#[derive(Debug)]
pub struct Catalog<T> {
    items: Arc<[T]>,
}

/// The memory steps of one scenario
pub type StepCatalog = Catalog<StepRecord>;

/// The top-level sections of a lesson
pub type SectionCatalog = Catalog<SectionDescriptor>;

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, rejecting an empty sequence
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog { kind: T::KIND });
        }
        Ok(Self { items: items.into() })
    }
}

impl<T> Catalog<T> {
    /// Build a catalog from a guaranteed first entry and any number of others
    pub fn from_first(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = std::iter::once(first).chain(rest).collect();
        Self { items: items.into() }
    }

    /// Number of entries, never zero
    pub fn len(&self) -> NonZeroUsize {
        // Construction rejects empty sequences.
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All entries as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

impl<T> Index<usize> for Catalog<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: CatalogItem> TryFrom<Vec<T>> for Catalog<T> {
    type Error = CatalogError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T> Deserialize<'de> for Catalog<T>
where
    T: CatalogItem + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

/// Side-by-side card used by static pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Palette key for the card
    #[serde(default)]
    pub accent: Accent,
    /// Short badges shown under the title
    #[serde(default)]
    pub tags: Vec<String>,
    /// Body lines
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Static page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A sub-heading
    Heading {
        /// Heading text
        text: String,
        /// Palette key
        #[serde(default)]
        accent: Accent,
    },
    /// A paragraph of running text
    Paragraph {
        /// Paragraph text
        text: String,
        /// Emphasis
        #[serde(default)]
        tone: Tone,
    },
    /// A boxed call-out
    Callout {
        /// Optional call-out title
        #[serde(default)]
        title: Option<String>,
        /// Palette key
        #[serde(default)]
        accent: Accent,
        /// Body lines
        #[serde(default)]
        lines: Vec<String>,
    },
    /// A titled source listing
    Code {
        /// Listing title, usually the file name
        title: String,
        /// Source lines
        lines: Vec<String>,
    },
    /// A numbered list
    Numbered {
        /// Optional list title
        #[serde(default)]
        title: Option<String>,
        /// Palette key for the numbers
        #[serde(default)]
        accent: Accent,
        /// List items
        items: Vec<String>,
    },
    /// Cards laid out side by side
    Cards {
        /// The cards, left to right
        cards: Vec<Card>,
    },
    /// A titled box grouping other blocks
    Group {
        /// Group title
        title: String,
        /// Palette key
        #[serde(default)]
        accent: Accent,
        /// Nested blocks
        blocks: Vec<Block>,
    },
}

/// A section made only of static blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    /// Page heading
    pub heading: String,
    /// Page content, top to bottom
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Titles for the three memory panels of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLabels {
    /// Title of the stack panel
    pub stack: String,
    /// Title of the heap panel
    pub heap: String,
    /// Title of the loaded-units (metadata) panel
    pub loaded_units: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            stack: "Stack".to_string(),
            heap: "Heap".to_string(),
            loaded_units: "Loaded Units".to_string(),
        }
    }
}

/// A section that steps through memory snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Section heading
    pub heading: String,
    /// One-line introduction
    #[serde(default)]
    pub blurb: String,
    /// Memory panel titles
    #[serde(default)]
    pub labels: PanelLabels,
    /// The steps
    pub steps: StepCatalog,
}

/// One explained source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNote {
    /// Line number shown in the badge
    pub line: u32,
    /// The source line
    pub code: String,
    /// Plain-language explanation
    pub explanation: String,
    /// What happens in the runtime's memory, if worth telling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_note: Option<String>,
    /// Palette key for the badge and border
    #[serde(default)]
    pub accent: Accent,
}

/// Line notes belonging to one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGroup {
    /// Group title, usually the file name
    pub title: String,
    /// Notes in line order
    pub notes: Vec<LineNote>,
}

/// A section of individually expandable line explanations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkthroughPage {
    /// Page heading
    pub heading: String,
    /// Usage hint shown under the heading
    #[serde(default)]
    pub hint: String,
    /// Groups, top to bottom
    pub groups: Vec<LineGroup>,
}

impl WalkthroughPage {
    /// Total number of notes across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|group| group.notes.len()).sum()
    }

    /// All notes in display order; the position is the entry index
    pub fn notes(&self) -> impl Iterator<Item = &LineNote> {
        self.groups.iter().flat_map(|group| group.notes.iter())
    }
}

/// What a section renders: one variant per kind of content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// Static explanatory content
    Static(StaticPage),
    /// A step-by-step memory scenario owning a step player
    Scenario(Scenario),
    /// Expandable line-by-line explanations
    Walkthrough(WalkthroughPage),
}

/// One top-level section ("tab")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Short icon shown before the label
    pub icon: String,
    /// Tab label
    pub label: String,
    /// Section content
    pub body: SectionBody,
}

/// A complete lesson: header text plus its sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Small line above the title
    #[serde(default)]
    pub eyebrow: String,
    /// Lesson title
    pub title: String,
    /// Line under the title
    #[serde(default)]
    pub subtitle: String,
    /// The sections, in tab order
    pub sections: SectionCatalog,
}

impl Lesson {
    /// Check authoring invariants the type system does not already enforce
    pub fn validate(&self) -> Result<(), CatalogError> {
        for section in &self.sections {
            if let SectionBody::Walkthrough(page) = &section.body {
                if let Some(group) = page.groups.iter().find(|group| group.notes.is_empty()) {
                    return Err(CatalogError::EmptyLineGroup {
                        section: section.label.clone(),
                        group: group.title.clone(),
                    });
                }
                if page.entry_count() == 0 {
                    return Err(CatalogError::EmptyWalkthrough { section: section.label.clone() });
                }
            }
        }
        Ok(())
    }
}
