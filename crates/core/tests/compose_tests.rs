mod common;

use memlab_core::{compose, Input, Node, PanelId, RemountPolicy, Viewer};
use memlab_core::view::{EMPTY_HEAP, FRESH_BADGE};
use tracing::info;

fn viewer_at_step(step: i64) -> Viewer {
    let mut viewer = Viewer::new(common::six_section_lesson(), RemountPolicy::Reset).unwrap();
    viewer.apply(Input::SelectSection(3));
    viewer.apply(Input::SelectStep(step));
    viewer
}

#[test]
fn test_header_tabs_and_pager() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");
    let viewer = Viewer::new(common::six_section_lesson(), RemountPolicy::Reset).unwrap();
    let view = compose(&viewer);

    assert_eq!(view.header.title, "Exporter");
    assert_eq!(view.tabs.len(), 6);
    assert_eq!(view.tabs[0].label, "📋 Requirement");
    assert!(view.tabs[0].selected);
    assert_eq!(view.tabs[3].action, Input::SelectSection(3));
    assert_eq!((view.pager.position, view.pager.total), (1, 6));
    assert!(!view.pager.previous.enabled);
    assert!(view.pager.next.enabled);
}

#[test]
fn test_pager_disables_next_on_last_section() {
    memlab_common::logging::ensure_test_logging(None);
    let mut viewer = Viewer::new(common::six_section_lesson(), RemountPolicy::Reset).unwrap();
    viewer.apply(Input::SelectSection(5));
    let view = compose(&viewer);

    assert_eq!(view.pager.position, 6);
    assert!(view.pager.previous.enabled);
    assert!(!view.pager.next.enabled);
}

#[test]
fn test_stack_lists_top_frame_first() {
    memlab_common::logging::ensure_test_logging(None);
    let view = compose(&viewer_at_step(2));
    let stack = view.body.find(PanelId::Stack).unwrap();

    assert_eq!(stack.child_titles(), vec!["createExporter() frame", "main() frame"]);
}

#[test]
fn test_single_heap_object() {
    memlab_common::logging::ensure_test_logging(None);
    let view = compose(&viewer_at_step(3));
    let heap = view.body.find(PanelId::Heap).unwrap();

    assert_eq!(heap.child_titles(), vec!["0x2000"]);
    let Node::Panel(object) = &heap.children[0] else { panic!("expected heap object panel") };
    assert_eq!(object.lines(), vec!["PdfExporter"]);
    assert_eq!(object.footer.as_deref(), Some(FRESH_BADGE));
}

#[test]
fn test_empty_heap_placeholder() {
    memlab_common::logging::ensure_test_logging(None);
    let view = compose(&viewer_at_step(0));
    let heap = view.body.find(PanelId::Heap).unwrap();

    assert_eq!(heap.lines(), vec![EMPTY_HEAP]);
}

#[test]
fn test_connections_and_insight_only_when_present() {
    memlab_common::logging::ensure_test_logging(None);

    let step0 = compose(&viewer_at_step(0));
    assert!(step0.body.find(PanelId::Connections).is_none());
    assert!(step0.body.find(PanelId::KeyInsight).is_none());
    assert!(step0.body.find(PanelId::StepInfo).is_some());

    let step1 = compose(&viewer_at_step(1));
    let connections = step1.body.find(PanelId::Connections).unwrap();
    assert_eq!(connections.lines(), vec!["args → 0x1000"]);
    assert!(step1.body.find(PanelId::KeyInsight).is_none());

    for step in [2, 4, 5] {
        let view = compose(&viewer_at_step(step));
        assert!(view.body.find(PanelId::KeyInsight).is_some(), "step {step}");
    }
}

#[test]
fn test_step_buttons_mark_current() {
    memlab_common::logging::ensure_test_logging(None);
    let view = compose(&viewer_at_step(4));

    let Some(Node::Buttons { buttons }) =
        view.body.children().iter().find(|n| matches!(n, Node::Buttons { .. }))
    else {
        panic!("expected step buttons");
    };
    assert_eq!(buttons.len(), 6);
    assert_eq!(buttons[4].label, "Step 4");
    assert!(buttons[4].selected);
    assert_eq!(buttons.iter().filter(|b| b.selected).count(), 1);
}

#[test]
fn test_walkthrough_entries_show_detail_when_expanded() {
    memlab_common::logging::ensure_test_logging(None);
    let mut viewer = Viewer::new(common::six_section_lesson(), RemountPolicy::Reset).unwrap();
    viewer.apply(Input::SelectSection(2));
    viewer.apply(Input::ToggleEntry(2));

    let view = compose(&viewer);
    let entries = view.body.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].focused);
    assert!(entries[0].detail.is_none());
    assert_eq!(entries[2].code, "c");
    let detail = entries[2].detail.as_ref().unwrap();
    assert_eq!(detail.explanation, "explains c");
    assert_eq!(detail.runtime_note.as_deref(), Some("runtime"));
}

#[test]
fn test_compose_is_pure() {
    memlab_common::logging::ensure_test_logging(None);
    let viewer = viewer_at_step(3);
    assert_eq!(compose(&viewer), compose(&viewer));
}
