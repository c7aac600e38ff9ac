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

//! View composer
//!
//! [`compose`] is a pure function of the [`Viewer`]'s current selection: it
//! reads the active section, its nested state and the catalogs, and builds a
//! host-agnostic render tree. Nothing here is cached; a host recomposes after
//! every input.

use crate::{
    catalog::{
        Accent, Block, Frame, HeapObject, KeyInsight, LineNote, Scenario, SectionBody, StaticPage,
        Tone, WalkthroughPage,
    },
    entry::Walkthrough,
    navigation::StepPlayer,
    session::{Input, SectionState, Viewer},
};
use serde::Serialize;

/// Placeholder shown in an empty heap panel
pub const EMPTY_HEAP: &str = "Empty — no objects yet";

/// Placeholder shown in an empty stack panel
pub const EMPTY_STACK: &str = "Empty";

/// Footer of the stack panel
pub const STACK_GROWS_UPWARD: &str = "↑ grows upward";

/// Badge for objects allocated by the current step
pub const FRESH_BADGE: &str = "✨ NEW!";

/// The complete render tree for one frame of the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Lesson header
    pub header: Header,
    /// One button per section
    pub tabs: Vec<Button>,
    /// Content of the active section
    pub body: Node,
    /// Previous/next section controls
    pub pager: Pager,
}

/// Lesson header text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Small line above the title
    pub eyebrow: String,
    /// Lesson title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
}

/// A clickable control and the input it triggers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Text on the button
    pub label: String,
    /// Whether the button represents the current selection
    pub selected: bool,
    /// Whether activating the button would do anything
    pub enabled: bool,
    /// Input sent when the button is activated
    pub action: Input,
}

/// Section pager shown under the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    /// 1-based position of the active section
    pub position: usize,
    /// Number of sections
    pub total: usize,
    /// "Previous" control, disabled on the first section
    pub previous: Button,
    /// "Next" control, disabled on the last section
    pub next: Button,
}

/// Well-known panels hosts and tests can look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    /// Title and description of the current step
    StepInfo,
    /// Stack frames, most recent on top
    Stack,
    /// Heap objects
    Heap,
    /// Loaded units (metadata area)
    LoadedUnits,
    /// Reference/relationship annotations
    Connections,
    /// Key insight callout
    KeyInsight,
}

/// A titled box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    /// Identity for well-known panels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PanelId>,
    /// Panel title
    pub title: String,
    /// Palette key for the border and title
    pub accent: Accent,
    /// Content, top to bottom
    pub children: Vec<Node>,
    /// Optional line under the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// An expandable line explanation as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    /// Flat entry index, the argument of [`Input::ToggleEntry`]
    pub index: usize,
    /// Line number badge
    pub number: u32,
    /// The source line
    pub code: String,
    /// Palette key
    pub accent: Accent,
    /// Whether the entry is open
    pub expanded: bool,
    /// Whether the entry has keyboard focus
    pub focused: bool,
    /// The explanation, present only while expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<EntryDetail>,
}

/// Body of an expanded entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail {
    /// Plain-language explanation
    pub explanation: String,
    /// Memory-level explanation, if authored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_note: Option<String>,
}

/// A render tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// Children stacked top to bottom
    Column {
        /// The children
        children: Vec<Node>,
    },
    /// Children side by side, left to right
    Row {
        /// The children
        children: Vec<Node>,
    },
    /// A heading
    Heading {
        /// Heading text
        text: String,
        /// Palette key
        accent: Accent,
    },
    /// A run of text
    Text {
        /// The text
        text: String,
        /// Optional palette key
        #[serde(skip_serializing_if = "Option::is_none")]
        accent: Option<Accent>,
        /// Emphasis
        tone: Tone,
    },
    /// A boxed panel
    Panel(Panel),
    /// A strip of buttons
    Buttons {
        /// The buttons, left to right
        buttons: Vec<Button>,
    },
    /// A source listing
    Code {
        /// Listing title
        title: String,
        /// Source lines
        lines: Vec<String>,
    },
    /// An expandable line explanation
    Entry(EntryView),
}

impl Node {
    /// Plain text node
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), accent: None, tone: Tone::Normal }
    }

    /// Text node with a tone and optional accent
    pub fn styled(text: impl Into<String>, accent: Option<Accent>, tone: Tone) -> Self {
        Self::Text { text: text.into(), accent, tone }
    }

    /// Direct children of this node
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Column { children } | Self::Row { children } => children,
            Self::Panel(panel) => &panel.children,
            _ => &[],
        }
    }

    /// First panel with `id`, depth-first
    pub fn find(&self, id: PanelId) -> Option<&Panel> {
        if let Self::Panel(panel) = self {
            if panel.id == Some(id) {
                return Some(panel);
            }
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Every entry node, depth-first
    pub fn entries(&self) -> Vec<&EntryView> {
        let mut found = Vec::new();
        self.collect_entries(&mut found);
        found
    }

    fn collect_entries<'a>(&'a self, found: &mut Vec<&'a EntryView>) {
        if let Self::Entry(entry) = self {
            found.push(entry);
        }
        for child in self.children() {
            child.collect_entries(found);
        }
    }
}

impl Panel {
    fn new(title: impl Into<String>, accent: Accent, children: Vec<Node>) -> Self {
        Self { id: None, title: title.into(), accent, children, footer: None }
    }

    fn with_id(mut self, id: PanelId) -> Self {
        self.id = Some(id);
        self
    }

    fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Text of every direct text child, in order
    pub fn lines(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Titles of every direct panel child, in order
    pub fn child_titles(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Panel(panel) => Some(panel.title.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Derive the render tree for the viewer's current state
pub fn compose(viewer: &Viewer) -> View {
    let lesson = viewer.lesson();
    let navigator = viewer.navigator();
    let active = navigator.index();

    let tabs = navigator
        .catalog()
        .iter()
        .enumerate()
        .map(|(index, section)| Button {
            label: format!("{} {}", section.icon, section.label),
            selected: index == active,
            enabled: true,
            action: Input::SelectSection(signed(index)),
        })
        .collect();

    let pager = Pager {
        position: active + 1,
        total: navigator.len(),
        previous: Button {
            label: "← Previous".to_string(),
            selected: false,
            enabled: !navigator.is_first(),
            action: Input::PreviousSection,
        },
        next: Button {
            label: "Next →".to_string(),
            selected: false,
            enabled: !navigator.is_last(),
            action: Input::NextSection,
        },
    };

    View {
        header: Header {
            eyebrow: lesson.eyebrow.clone(),
            title: lesson.title.clone(),
            subtitle: lesson.subtitle.clone(),
        },
        tabs,
        body: compose_body(&viewer.active_section().body, viewer.active_state()),
        pager,
    }
}

/// Render tree for one section body given its mounted state
pub fn compose_body(body: &SectionBody, state: &SectionState) -> Node {
    match (body, state) {
        (SectionBody::Static(page), _) => compose_static(page),
        (SectionBody::Scenario(scenario), SectionState::Scenario(player)) => {
            compose_scenario(scenario, player)
        }
        (SectionBody::Walkthrough(page), SectionState::Walkthrough(walkthrough)) => {
            compose_walkthrough(page, walkthrough)
        }
        // State from another section cannot be shown here; fall back to a fresh mount.
        (SectionBody::Scenario(scenario), _) => {
            compose_scenario(scenario, &StepPlayer::new(scenario.steps.clone()))
        }
        (SectionBody::Walkthrough(page), _) => {
            compose_walkthrough(page, &Walkthrough::new(page.entry_count()))
        }
    }
}

fn compose_scenario(scenario: &Scenario, player: &StepPlayer) -> Node {
    let step = player.current();

    let step_buttons = (0..player.len())
        .map(|index| Button {
            label: format!("Step {index}"),
            selected: index == player.index(),
            enabled: true,
            action: Input::SelectStep(signed(index)),
        })
        .collect();

    let mut children = vec![
        Node::Heading { text: scenario.heading.clone(), accent: Accent::Primary },
        Node::styled(scenario.blurb.clone(), None, Tone::Muted),
        Node::Buttons { buttons: step_buttons },
        Node::Panel(
            Panel::new(
                step.title.clone(),
                Accent::Yellow,
                vec![Node::text(step.description.clone())],
            )
            .with_id(PanelId::StepInfo),
        ),
        Node::Row {
            children: vec![
                Node::Panel(stack_panel(&scenario.labels.stack, &step.stack_frames)),
                Node::Panel(heap_panel(&scenario.labels.heap, &step.heap_objects)),
                Node::Panel(loaded_units_panel(&scenario.labels.loaded_units, &step.loaded_units)),
            ],
        },
    ];

    if !step.annotations.is_empty() {
        let lines = step
            .annotations
            .iter()
            .map(|annotation| Node::styled(annotation.clone(), None, Tone::Mono))
            .collect();
        children.push(Node::Panel(
            Panel::new("🔗 References & Connections", Accent::Pink, lines)
                .with_id(PanelId::Connections),
        ));
    }

    if let Some(insight) = &step.key_insight {
        children.push(Node::Panel(insight_panel(insight)));
    }

    Node::Column { children }
}

fn stack_panel(title: &str, frames: &[Frame]) -> Panel {
    let children = if frames.is_empty() {
        vec![Node::styled(EMPTY_STACK, Some(Accent::Muted), Tone::Muted)]
    } else {
        // Catalog order is top of stack first, which is also top-to-bottom display order.
        frames
            .iter()
            .map(|frame| {
                let locals = frame
                    .locals
                    .iter()
                    .map(|local| Node::styled(local.to_string(), None, Tone::Mono))
                    .collect();
                Node::Panel(Panel::new(frame.label.clone(), frame.accent, locals))
            })
            .collect()
    };

    Panel::new(title, Accent::Blue, children)
        .with_id(PanelId::Stack)
        .with_footer(STACK_GROWS_UPWARD)
}

fn heap_panel(title: &str, objects: &[HeapObject]) -> Panel {
    let children = if objects.is_empty() {
        vec![Node::styled(EMPTY_HEAP, Some(Accent::Muted), Tone::Muted)]
    } else {
        objects
            .iter()
            .map(|object| {
                let mut panel = Panel::new(
                    object.address.clone(),
                    object.accent,
                    vec![Node::text(object.type_label.clone())],
                );
                if object.fresh {
                    panel = panel.with_footer(FRESH_BADGE);
                }
                Node::Panel(panel)
            })
            .collect()
    };

    Panel::new(title, Accent::Primary, children).with_id(PanelId::Heap)
}

fn loaded_units_panel(title: &str, units: &[String]) -> Panel {
    let children = units
        .iter()
        .map(|unit| Node::styled(unit.clone(), Some(Accent::Purple), Tone::Mono))
        .collect();

    Panel::new(title, Accent::Purple, children).with_id(PanelId::LoadedUnits)
}

fn insight_panel(insight: &KeyInsight) -> Panel {
    let body = insight.body.iter().map(|line| Node::text(line.clone())).collect();

    Panel::new(insight.title.clone(), insight.accent, body)
        .with_id(PanelId::KeyInsight)
}

fn compose_walkthrough(page: &WalkthroughPage, walkthrough: &Walkthrough) -> Node {
    let mut children = vec![
        Node::Heading { text: page.heading.clone(), accent: Accent::Primary },
        Node::styled(page.hint.clone(), None, Tone::Muted),
    ];

    let mut index = 0;
    for group in &page.groups {
        let entries = group
            .notes
            .iter()
            .map(|note| {
                let node = Node::Entry(entry_view(index, note, walkthrough));
                index += 1;
                node
            })
            .collect();
        children.push(Node::Panel(Panel::new(group.title.clone(), Accent::Primary, entries)));
    }

    Node::Column { children }
}

fn entry_view(index: usize, note: &LineNote, walkthrough: &Walkthrough) -> EntryView {
    let expanded = walkthrough.is_expanded(index);

    EntryView {
        index,
        number: note.line,
        code: note.code.clone(),
        accent: note.accent,
        expanded,
        focused: walkthrough.focused() == index,
        detail: expanded.then(|| EntryDetail {
            explanation: note.explanation.clone(),
            runtime_note: note.runtime_note.clone(),
        }),
    }
}

fn compose_static(page: &StaticPage) -> Node {
    let mut children = vec![Node::Heading { text: page.heading.clone(), accent: Accent::Primary }];
    children.extend(page.blocks.iter().map(compose_block));
    Node::Column { children }
}

fn compose_block(block: &Block) -> Node {
    match block {
        Block::Heading { text, accent } => Node::Heading { text: text.clone(), accent: *accent },
        Block::Paragraph { text, tone } => Node::styled(text.clone(), None, *tone),
        Block::Callout { title, accent, lines } => Node::Panel(Panel::new(
            title.clone().unwrap_or_default(),
            *accent,
            lines.iter().map(|line| Node::text(line.clone())).collect(),
        )),
        Block::Code { title, lines } => Node::Code { title: title.clone(), lines: lines.clone() },
        Block::Numbered { title, accent, items } => {
            let lines = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    Node::styled(format!("{}. {item}", i + 1), Some(*accent), Tone::Normal)
                })
                .collect();
            match title {
                Some(title) => Node::Panel(Panel::new(title.clone(), *accent, lines)),
                None => Node::Column { children: lines },
            }
        }
        Block::Cards { cards } => Node::Row {
            children: cards
                .iter()
                .map(|card| {
                    let mut lines = Vec::new();
                    if !card.tags.is_empty() {
                        let tags =
                            card.tags.iter().map(|tag| format!("[{tag}]")).collect::<Vec<_>>();
                        lines.push(Node::styled(tags.join(" "), Some(card.accent), Tone::Strong));
                    }
                    lines.extend(card.lines.iter().map(|line| Node::text(line.clone())));
                    Node::Panel(Panel::new(card.title.clone(), card.accent, lines))
                })
                .collect(),
        },
        Block::Group { title, accent, blocks } => Node::Panel(Panel::new(
            title.clone(),
            *accent,
            blocks.iter().map(compose_block).collect(),
        )),
    }
}

fn signed(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Local;

    #[test]
    fn test_stack_panel_keeps_top_first() {
        let frames = vec![
            Frame::new("createExporter() frame", Accent::Pink)
                .with_local(Local::value("type", "\"pdf\"")),
            Frame::new("main() frame", Accent::Blue),
        ];
        let panel = stack_panel("Stack", &frames);

        assert_eq!(panel.child_titles(), vec!["createExporter() frame", "main() frame"]);
        assert_eq!(panel.footer.as_deref(), Some(STACK_GROWS_UPWARD));
    }

    #[test]
    fn test_empty_heap_shows_placeholder() {
        let panel = heap_panel("Heap", &[]);
        assert_eq!(panel.lines(), vec![EMPTY_HEAP]);
    }

    #[test]
    fn test_fresh_object_gets_badge() {
        let objects = [HeapObject::new("0x2000", "PdfExporter", Accent::Primary).fresh()];
        let panel = heap_panel("Heap", &objects);

        let Node::Panel(object) = &panel.children[0] else { panic!("expected object panel") };
        assert_eq!(object.title, "0x2000");
        assert_eq!(object.lines(), vec!["PdfExporter"]);
        assert_eq!(object.footer.as_deref(), Some(FRESH_BADGE));
    }

    #[test]
    fn test_numbered_block_counts_from_one() {
        let node = compose_block(&Block::Numbered {
            title: None,
            accent: Accent::Primary,
            items: vec!["first".into(), "second".into()],
        });

        let texts: Vec<_> = node
            .children()
            .iter()
            .filter_map(|n| match n {
                Node::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["1. first", "2. second"]);
    }
}
