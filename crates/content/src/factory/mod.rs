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

//! The Factory Pattern practice lab: a document exporter exercise in Java

mod line_by_line;
mod memory;
mod requirement;
mod solution;
mod static_deep;
mod why_abstract;

use memlab_core::{Lesson, SectionBody, SectionCatalog, SectionDescriptor};
use tracing::trace;

pub use memory::exporter_steps;

/// The complete factory lesson, six sections in tab order
pub fn factory_lesson() -> Lesson {
    let requirement = section("📋", "Requirement", SectionBody::Static(requirement::page()));
    let rest = vec![
        section("✅", "Solution", SectionBody::Static(solution::page())),
        section("🔬", "Line-by-Line", SectionBody::Walkthrough(line_by_line::page())),
        section("🧠", "JVM Memory", SectionBody::Scenario(memory::scenario())),
        section("🤔", "Why Abstract?", SectionBody::Static(why_abstract::page())),
        section("⚡", "Static Deep Dive", SectionBody::Static(static_deep::page())),
    ];
    trace!(sections = rest.len() + 1, "Built factory lesson");

    Lesson {
        eyebrow: "Factory Pattern — Practice Lab".to_string(),
        title: "Document Exporter Exercise".to_string(),
        subtitle: "Complete requirement → solution → line-by-line → JVM internals → abstract class deep dive"
            .to_string(),
        sections: SectionCatalog::from_first(requirement, rest),
    }
}

fn section(icon: &str, label: &str, body: SectionBody) -> SectionDescriptor {
    SectionDescriptor { icon: icon.to_string(), label: label.to_string(), body }
}
