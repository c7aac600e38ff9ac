#![allow(dead_code)]

use memlab_core::{
    Accent, Frame, HeapObject, KeyInsight, Lesson, LineGroup, LineNote, Local, PanelLabels,
    Scenario, SectionBody, SectionCatalog, SectionDescriptor, StaticPage, StepCatalog, StepRecord,
    WalkthroughPage,
};

pub fn step(title: &str) -> StepRecord {
    StepRecord {
        title: title.to_string(),
        description: format!("{title} description"),
        stack_frames: vec![],
        heap_objects: vec![],
        loaded_units: vec![],
        annotations: vec![],
        key_insight: None,
    }
}

/// A six-step scenario shaped like the factory lesson
pub fn scenario_steps() -> StepCatalog {
    let main = || Frame::new("main() frame", Accent::Blue);
    let insight = |title: &str| {
        Some(KeyInsight { title: title.to_string(), body: vec![], accent: Accent::Yellow })
    };

    let mut steps = vec![
        step("Step 0"),
        step("Step 1"),
        step("Step 2"),
        step("Step 3"),
        step("Step 4"),
        step("Step 5"),
    ];
    steps[0].loaded_units = vec!["Main.class".into()];
    steps[1].stack_frames = vec![main().with_local(Local::reference("args", "0x1000"))];
    steps[1].heap_objects = vec![HeapObject::new("0x1000", "String[] args", Accent::Muted)];
    steps[1].annotations = vec!["args → 0x1000".into()];
    steps[2].stack_frames = vec![
        Frame::new("createExporter() frame", Accent::Pink)
            .with_local(Local::value("type", "\"pdf\"")),
        main().with_local(Local::unset("exporter")),
    ];
    steps[2].key_insight = insight("Static method = NO object on Heap!");
    steps[3].heap_objects = vec![HeapObject::new("0x2000", "PdfExporter", Accent::Primary).fresh()];
    steps[4].stack_frames = vec![main().with_local(Local::reference("exporter", "0x2000"))];
    steps[4].key_insight = insight("Reference Type ≠ Object Type!");
    steps[5].key_insight = insight("Dynamic Dispatch");

    StepCatalog::new(steps).unwrap()
}

fn section(icon: &str, label: &str, body: SectionBody) -> SectionDescriptor {
    SectionDescriptor { icon: icon.into(), label: label.into(), body }
}

fn page(heading: &str) -> SectionBody {
    SectionBody::Static(StaticPage { heading: heading.into(), blocks: vec![] })
}

fn note(line: u32, code: &str) -> LineNote {
    LineNote {
        line,
        code: code.into(),
        explanation: format!("explains {code}"),
        runtime_note: Some("runtime".into()),
        accent: Accent::Primary,
    }
}

/// Six sections: static, static, walkthrough (3 entries), scenario, static, static
pub fn six_section_lesson() -> Lesson {
    let walkthrough = WalkthroughPage {
        heading: "Line by line".into(),
        hint: "Toggle a line".into(),
        groups: vec![
            LineGroup { title: "A.java".into(), notes: vec![note(1, "a"), note(2, "b")] },
            LineGroup { title: "B.java".into(), notes: vec![note(1, "c")] },
        ],
    };
    let scenario = Scenario {
        heading: "Memory".into(),
        blurb: "Watch memory change".into(),
        labels: PanelLabels::default(),
        steps: scenario_steps(),
    };

    Lesson {
        eyebrow: "Lab".into(),
        title: "Exporter".into(),
        subtitle: "Practice".into(),
        sections: SectionCatalog::new(vec![
            section("📋", "Requirement", page("Requirement")),
            section("✅", "Solution", page("Solution")),
            section("🔬", "Line-by-Line", SectionBody::Walkthrough(walkthrough)),
            section("🧠", "Memory", SectionBody::Scenario(scenario)),
            section("🤔", "Why Abstract?", page("Why")),
            section("⚡", "Static", page("Static")),
        ])
        .unwrap(),
    }
}
