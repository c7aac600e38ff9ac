use memlab_content::{factory_lesson, from_toml_str, load_from_path, to_toml_string, ContentError};
use memlab_core::{compose, Input, PanelId, RemountPolicy, SectionBody, Viewer};
use std::io::Write;
use tracing::info;

fn labels(viewer: &Viewer) -> Vec<String> {
    viewer.navigator().catalog().iter().map(|s| s.label.clone()).collect()
}

#[test]
fn test_factory_lesson_has_six_sections() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");
    let viewer = Viewer::new(factory_lesson(), RemountPolicy::Reset).unwrap();

    assert_eq!(
        labels(&viewer),
        vec![
            "Requirement",
            "Solution",
            "Line-by-Line",
            "JVM Memory",
            "Why Abstract?",
            "Static Deep Dive"
        ]
    );
    assert_eq!(viewer.lesson().title, "Document Exporter Exercise");
}

#[test]
fn test_memory_scenario_insights() {
    memlab_common::logging::ensure_test_logging(None);
    let lesson = factory_lesson();
    let SectionBody::Scenario(scenario) = &lesson.sections[3].body else {
        panic!("JVM Memory should be a scenario");
    };

    assert_eq!(scenario.steps.len().get(), 6);
    let with_insight: Vec<_> = scenario
        .steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.key_insight.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_insight, vec![2, 4, 5]);
}

#[test]
fn test_walkthrough_groups() {
    memlab_common::logging::ensure_test_logging(None);
    let lesson = factory_lesson();
    let SectionBody::Walkthrough(page) = &lesson.sections[2].body else {
        panic!("Line-by-Line should be a walkthrough");
    };

    let sizes: Vec<_> = page.groups.iter().map(|g| g.notes.len()).collect();
    assert_eq!(sizes, vec![3, 4, 5, 2]);
    assert_eq!(page.entry_count(), 14);
}

#[test]
fn test_step_two_view() {
    memlab_common::logging::ensure_test_logging(None);
    let mut viewer = Viewer::new(factory_lesson(), RemountPolicy::Reset).unwrap();
    viewer.apply(Input::SelectSection(3));
    viewer.apply(Input::SelectStep(2));

    let view = compose(&viewer);
    let stack = view.body.find(PanelId::Stack).unwrap();
    assert_eq!(stack.title, "📚 Stack (Thread)");
    assert_eq!(stack.child_titles(), vec!["createExporter() frame", "main() frame"]);

    let heap = view.body.find(PanelId::Heap).unwrap();
    assert_eq!(heap.child_titles(), vec!["0x1000"]);
    assert!(view.body.find(PanelId::Connections).is_none());

    let insight = view.body.find(PanelId::KeyInsight).unwrap();
    assert_eq!(insight.title, "💡 KEY: Static method = NO object on Heap!");
}

#[test]
fn test_toml_round_trip_through_file() {
    memlab_common::logging::ensure_test_logging(None);
    let lesson = factory_lesson();
    let text = to_toml_string(&lesson).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();

    let loaded = load_from_path(file.path()).unwrap();
    assert_eq!(loaded.title, lesson.title);
    assert_eq!(loaded.sections.len(), lesson.sections.len());
    for (a, b) in loaded.sections.iter().zip(lesson.sections.iter()) {
        assert_eq!(a.label, b.label);
    }
    let (SectionBody::Scenario(a), SectionBody::Scenario(b)) =
        (&loaded.sections[3].body, &lesson.sections[3].body)
    else {
        panic!("expected scenarios");
    };
    assert_eq!(a.steps.as_slice(), b.steps.as_slice());
}

#[test]
fn test_missing_file_reports_path() {
    memlab_common::logging::ensure_test_logging(None);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_invalid_toml_rejected() {
    memlab_common::logging::ensure_test_logging(None);
    assert!(matches!(from_toml_str("title = "), Err(ContentError::Toml(_))));
}
