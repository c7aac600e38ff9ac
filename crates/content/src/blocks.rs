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

//! Shorthand constructors for authoring static pages in Rust

use memlab_core::{Accent, Block, Card, LineNote, Tone};

pub(crate) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(crate) fn heading(text: &str, accent: Accent) -> Block {
    Block::Heading { text: text.to_string(), accent }
}

pub(crate) fn paragraph(text: &str) -> Block {
    Block::Paragraph { text: text.to_string(), tone: Tone::Normal }
}

pub(crate) fn styled(text: &str, tone: Tone) -> Block {
    Block::Paragraph { text: text.to_string(), tone }
}

pub(crate) fn callout(title: Option<&str>, accent: Accent, body: &[&str]) -> Block {
    Block::Callout { title: title.map(str::to_string), accent, lines: lines(body) }
}

pub(crate) fn code<S: AsRef<str>>(title: &str, source: &[S]) -> Block {
    let lines = source.iter().map(|line| line.as_ref().to_string()).collect();
    Block::Code { title: title.to_string(), lines }
}

pub(crate) fn numbered(accent: Accent, items: &[&str]) -> Block {
    Block::Numbered { title: None, accent, items: lines(items) }
}

pub(crate) fn group(title: &str, accent: Accent, blocks: Vec<Block>) -> Block {
    Block::Group { title: title.to_string(), accent, blocks }
}

pub(crate) fn card(title: &str, accent: Accent, tags: &[&str], body: &[&str]) -> Card {
    Card { title: title.to_string(), accent, tags: lines(tags), lines: lines(body) }
}

pub(crate) fn note(
    line: u32,
    accent: Accent,
    code: &str,
    explanation: &str,
    runtime_note: Option<&str>,
) -> LineNote {
    LineNote {
        line,
        code: code.to_string(),
        explanation: explanation.to_string(),
        runtime_note: runtime_note.map(str::to_string),
        accent,
    }
}
