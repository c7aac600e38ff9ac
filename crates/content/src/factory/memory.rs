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

use memlab_core::{
    Accent, Frame, HeapObject, KeyInsight, Local, PanelLabels, Scenario, StepCatalog, StepRecord,
};

const LOADED_AT_START: [&str; 2] = ["Main.class", "DocumentExporter.interface"];
const LOADED_AFTER_FACTORY: [&str; 4] =
    ["Main.class", "DocumentExporter.interface", "ExporterFactory.class", "PdfExporter.class"];

pub(super) fn scenario() -> Scenario {
    Scenario {
        heading: "🧠 JVM Memory — Step by Step".to_string(),
        blurb: "Watch how objects, references, and memory work as each line executes".to_string(),
        labels: PanelLabels {
            stack: "📚 Stack (Thread)".to_string(),
            heap: "📦 Heap (Objects)".to_string(),
            loaded_units: "⚙️ Method Area".to_string(),
        },
        steps: exporter_steps(),
    }
}

/// The six memory snapshots of `Main` exporting a report through the factory
pub fn exporter_steps() -> StepCatalog {
    let first = step(
        "Step 0: Before main() runs",
        "JVM starts. ClassLoader loads Main.class into Method Area.",
    )
    .loaded(&LOADED_AT_START);

    let rest = [
        step("Step 1: main() is called", "JVM pushes a Stack Frame for main() method onto the Stack.")
            .frames(vec![main_frame().with_local(Local::reference("args", "String[]"))])
            .heap(vec![args_array()])
            .loaded(&LOADED_AT_START)
            .annotate("args → 0x1000"),
        step(
            "Step 2: ExporterFactory.createExporter(\"pdf\") called",
            "Static method call — NO ExporterFactory object created! \
             JVM loads ExporterFactory.class, then PdfExporter.class. Pushes createExporter() frame.",
        )
        .frames(vec![factory_frame(), main_frame_before_assignment()])
        .heap(vec![args_array()])
        .loaded(&LOADED_AFTER_FACTORY)
        .insight(
            "💡 KEY: Static method = NO object on Heap!",
            Accent::Yellow,
            &[
                "ExporterFactory.createExporter(\"pdf\") — notice we never write new ExporterFactory().",
                "The static method lives in the Method Area (class level), not in any object. \
                 This is why we use static for factory methods — there's no state to store, no reason to create a factory object.",
            ],
        ),
        step(
            "Step 3: new PdfExporter() executes inside factory",
            "JVM allocates memory on the Heap for a new PdfExporter object. Constructor runs. Reference returned.",
        )
        .frames(vec![
            factory_frame().with_local(Local::reference("return", "0x2000")),
            main_frame_before_assignment(),
        ])
        .heap(vec![args_array(), exporter_object().fresh()])
        .loaded(&LOADED_AFTER_FACTORY)
        .annotate("createExporter returns 0x2000"),
        step(
            "Step 4: Reference assigned to 'exporter' variable",
            "createExporter() frame is POPPED off Stack. \
             The returned reference (0x2000) is stored in 'exporter' variable. \
             Variable TYPE is DocumentExporter, but ACTUAL object is PdfExporter.",
        )
        .frames(vec![main_frame()
            .with_local(Local::reference("args", "0x1000"))
            .with_local(Local::reference("exporter", "0x2000 ✨"))])
        .heap(vec![args_array(), exporter_object()])
        .loaded(&LOADED_AFTER_FACTORY)
        .annotate("exporter (DocumentExporter type) ──→ 0x2000 (PdfExporter object)")
        .insight(
            "💡 KEY: Reference Type ≠ Object Type!",
            Accent::Primary,
            &[
                "DocumentExporter exporter → points to → PdfExporter object",
                "The variable type (left side) = interface. The actual object (on Heap) = PdfExporter.",
                "This is polymorphism. Tomorrow you can make it point to WordExporter — no code change in Main!",
            ],
        ),
        step(
            "Step 5: exporter.export(\"My Report Data\") called",
            "JVM uses DYNAMIC DISPATCH: checks actual object type (PdfExporter) → calls PdfExporter.export(). \
             New frame pushed. String result created on Heap.",
        )
        .frames(vec![
            Frame::new("PdfExporter.export() frame", Accent::Primary)
                .with_local(Local::reference("this", "0x2000"))
                .with_local(Local::value("content", "\"My Report Data\"")),
            main_frame()
                .with_local(Local::reference("args", "0x1000"))
                .with_local(Local::reference("exporter", "0x2000")),
        ])
        .heap(vec![
            args_array(),
            exporter_object(),
            HeapObject::new("0x3000", "\"[PDF Header] My Report Data [PDF Footer]\"", Accent::Yellow),
        ])
        .loaded(&LOADED_AFTER_FACTORY)
        .annotate("Dynamic Dispatch: Interface call → actual PdfExporter method")
        .insight(
            "💡 KEY: Dynamic Dispatch (Virtual Method Invocation)",
            Accent::Purple,
            &[
                "When JVM sees exporter.export(), it doesn't look at the variable type (DocumentExporter).",
                "It follows the reference to the actual object on the Heap → finds it's a PdfExporter → \
                 looks up PdfExporter's vtable → calls PdfExporter.export().",
                "This decision happens at runtime, not compile time!",
            ],
        ),
    ];

    StepCatalog::from_first(first, rest)
}

fn step(title: &str, description: &str) -> StepRecord {
    StepRecord {
        title: title.to_string(),
        description: description.to_string(),
        stack_frames: Vec::new(),
        heap_objects: Vec::new(),
        loaded_units: Vec::new(),
        annotations: Vec::new(),
        key_insight: None,
    }
}

fn main_frame() -> Frame {
    Frame::new("main() frame", Accent::Blue)
}

fn main_frame_before_assignment() -> Frame {
    main_frame().with_local(Local::reference("args", "0x1000")).with_local(Local::unset("exporter"))
}

fn factory_frame() -> Frame {
    Frame::new("createExporter() frame", Accent::Pink).with_local(Local::value("type", "\"pdf\""))
}

fn args_array() -> HeapObject {
    HeapObject::new("0x1000", "String[] args", Accent::Muted)
}

fn exporter_object() -> HeapObject {
    HeapObject::new("0x2000", "PdfExporter", Accent::Primary)
}

/// Builder-style setters used only while authoring steps
trait StepExt {
    fn frames(self, frames: Vec<Frame>) -> Self;
    fn heap(self, objects: Vec<HeapObject>) -> Self;
    fn loaded(self, units: &[&str]) -> Self;
    fn annotate(self, annotation: &str) -> Self;
    fn insight(self, title: &str, accent: Accent, body: &[&str]) -> Self;
}

impl StepExt for StepRecord {
    fn frames(mut self, frames: Vec<Frame>) -> Self {
        self.stack_frames = frames;
        self
    }

    fn heap(mut self, objects: Vec<HeapObject>) -> Self {
        self.heap_objects = objects;
        self
    }

    fn loaded(mut self, units: &[&str]) -> Self {
        self.loaded_units = units.iter().map(|unit| unit.to_string()).collect();
        self
    }

    fn annotate(mut self, annotation: &str) -> Self {
        self.annotations.push(annotation.to_string());
        self
    }

    fn insight(mut self, title: &str, accent: Accent, body: &[&str]) -> Self {
        self.key_insight = Some(KeyInsight {
            title: title.to_string(),
            body: body.iter().map(|line| line.to_string()).collect(),
            accent,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_zero_has_empty_stack_and_heap() {
        let steps = exporter_steps();

        assert!(steps[0].stack_frames.is_empty());
        assert!(steps[0].heap_objects.is_empty());
        assert_eq!(steps[0].loaded_units, LOADED_AT_START);
    }

    #[test]
    fn test_factory_frame_popped_on_assignment() {
        let steps = exporter_steps();

        let labels =
            |i: usize| steps[i].stack_frames.iter().map(|f| f.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels(3), vec!["createExporter() frame", "main() frame"]);
        assert_eq!(labels(4), vec!["main() frame"]);
    }

    #[test]
    fn test_only_step_three_allocates_fresh_object() {
        let steps = exporter_steps();

        let fresh: Vec<_> = steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.heap_objects.iter().any(|object| object.fresh))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fresh, vec![3]);
    }
}
