use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use memlab_common::logging::ensure_test_logging;
use memlab_core::{RemountPolicy, Viewer};
use memlab_tui::{App, Config, EventResponse, Theme};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tracing::info;

fn app() -> App {
    let viewer = Viewer::new(memlab_content::factory_lesson(), RemountPolicy::Reset).unwrap();
    App::new(viewer, Config::default())
}

fn press(app: &mut App, code: KeyCode) -> EventResponse {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
}

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn row_of(buffer: &Buffer, needle: &str) -> Option<usize> {
    rows(buffer).iter().position(|row| row.contains(needle))
}

/// Column where the ASCII `needle` starts on row `y`
fn column_of(buffer: &Buffer, y: u16, needle: &str) -> Option<u16> {
    let width = buffer.area.width;
    let len = u16::try_from(needle.len()).unwrap();
    (0..width.saturating_sub(len)).find(|&x| {
        needle.chars().zip(x..).all(|(c, cx)| buffer[(cx, y)].symbol() == c.to_string())
    })
}

fn scroll_down(app: &mut App) {
    let event = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse_batch(vec![event]);
}

#[test]
fn test_first_frame_shows_header_tabs_and_pager() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    let buffer = draw(&mut app, 120, 40);

    assert!(row_of(&buffer, "Document Exporter Exercise").is_some());
    assert!(row_of(&buffer, "Requirement").is_some());
    assert!(row_of(&buffer, "Static Deep Dive").is_some());
    assert!(row_of(&buffer, "1/6").is_some());
    assert!(row_of(&buffer, "Layout: Full | Remount: reset").is_some());
}

#[test]
fn test_section_keys_clamp() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Tab), EventResponse::Handled);
    assert_eq!(app.viewer().navigator().index(), 1);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.viewer().navigator().index(), 0);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.viewer().navigator().index(), 0);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.viewer().active_section().label, "JVM Memory");
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.viewer().navigator().index(), 5);
    assert_eq!(press(&mut app, KeyCode::Char(']')), EventResponse::Handled);
    assert_eq!(app.viewer().navigator().index(), 5);
}

#[test]
fn test_step_keys_drive_the_memory_section() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Right), EventResponse::NotHandled);

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.viewer().step_player().unwrap().index(), 2);

    let buffer = draw(&mut app, 120, 60);
    assert!(row_of(&buffer, "Step 2: ExporterFactory.createExporter").is_some());
    assert!(row_of(&buffer, "Static method = NO object on Heap!").is_some());
    assert!(row_of(&buffer, "Step 2/5").is_some());

    press(&mut app, KeyCode::End);
    assert_eq!(app.viewer().step_player().unwrap().index(), 5);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.viewer().step_player().unwrap().index(), 5);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.viewer().step_player().unwrap().index(), 0);
}

#[test]
fn test_leaving_memory_section_resets_step() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::BackTab);

    assert_eq!(app.viewer().step_player().unwrap().index(), 0);
}

#[test]
fn test_walkthrough_focus_and_toggle() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.viewer().walkthrough().unwrap().focused(), 1);

    let before = draw(&mut app, 120, 40);
    assert!(row_of(&before, "Plain English").is_none());

    assert_eq!(press(&mut app, KeyCode::Enter), EventResponse::Handled);
    assert!(app.viewer().walkthrough().unwrap().is_expanded(1));
    assert!(!app.viewer().walkthrough().unwrap().is_expanded(0));

    let after = draw(&mut app, 120, 40);
    assert!(row_of(&after, "Plain English").is_some());
    assert!(row_of(&after, "Open: 1/14").is_some());

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.viewer().walkthrough().unwrap().is_expanded(1));
}

#[test]
fn test_memory_panels_stack_on_narrow_terminals() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('4'));

    let wide = draw(&mut app, 120, 60);
    assert_eq!(row_of(&wide, "Stack (Thread)"), row_of(&wide, "Heap (Objects)"));

    let narrow = draw(&mut app, 70, 80);
    let stack = row_of(&narrow, "Stack (Thread)").unwrap();
    let heap = row_of(&narrow, "Heap (Objects)").unwrap();
    assert!(stack < heap);
    assert!(row_of(&narrow, "Layout: Mobile").is_some());
}

#[test]
fn test_help_overlay_swallows_keys() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_help_visible());
    assert!(row_of(&draw(&mut app, 120, 40), "MemLab Help").is_some());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.viewer().navigator().index(), 0);

    assert_eq!(press(&mut app, KeyCode::Esc), EventResponse::Handled);
    assert!(!app.is_help_visible());
    assert!(!app.should_exit());

    assert_eq!(press(&mut app, KeyCode::Char('q')), EventResponse::Exit);
    assert!(app.should_exit());
}

#[test]
fn test_ctrl_c_exits() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    let response = app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(response, EventResponse::Exit);
    assert!(app.should_exit());
}

#[test]
fn test_theme_key_cycles() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    assert_eq!(app.theme(), Theme::Midnight);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), Theme::Terminal);
    assert!(row_of(&draw(&mut app, 120, 40), "Terminal").is_some());
}

#[test]
fn test_wheel_scrolls_and_section_change_resets() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    draw(&mut app, 80, 16);
    scroll_down(&mut app);
    assert_eq!(app.scroll(), 3);

    draw(&mut app, 80, 16);
    assert_eq!(app.scroll(), 3);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.scroll(), 0);
}

#[test]
fn test_clicking_a_tab_selects_it() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    let buffer = draw(&mut app, 120, 40);
    let column = column_of(&buffer, 3, "Solution").unwrap();

    let click = MouseEvent {
        kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column,
        row: 3,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(app.handle_mouse_batch(vec![click]), EventResponse::Handled);
    assert_eq!(app.viewer().navigator().index(), 1);
}

fn click(app: &mut App, column: u16, row: u16) -> EventResponse {
    let event = MouseEvent {
        kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse_batch(vec![event])
}

#[test]
fn test_g_then_digit_jumps_to_step() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    // No scenario on the first section, so `g` is not a prefix there
    assert_eq!(press(&mut app, KeyCode::Char('g')), EventResponse::NotHandled);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.viewer().navigator().index(), 3);
    assert_eq!(press(&mut app, KeyCode::Char('g')), EventResponse::Handled);
    assert_eq!(press(&mut app, KeyCode::Char('3')), EventResponse::Handled);
    assert_eq!(app.viewer().navigator().index(), 3);
    assert_eq!(app.viewer().step_player().unwrap().index(), 3);

    let buffer = draw(&mut app, 120, 60);
    assert!(row_of(&buffer, "Step 3/5").is_some());

    // Out-of-range digits clamp to the last step
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.viewer().step_player().unwrap().index(), 5);

    // Without the prefix a digit still selects a section
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.viewer().step_player().unwrap().index(), 4);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.viewer().navigator().index(), 0);
}

#[test]
fn test_clicking_a_step_button_selects_it() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('4'));
    let buffer = draw(&mut app, 120, 40);
    let row = u16::try_from(row_of(&buffer, "[ Step 3 ]").unwrap()).unwrap();
    let column = column_of(&buffer, row, "[ Step 3 ]").unwrap();

    assert_eq!(click(&mut app, column + 2, row), EventResponse::Handled);
    assert_eq!(app.viewer().step_player().unwrap().index(), 3);

    let buffer = draw(&mut app, 120, 40);
    assert!(row_of(&buffer, "Step 3/5").is_some());
}

#[test]
fn test_clicking_a_line_toggles_it() {
    ensure_test_logging(None);
    info!("Running test");

    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    let buffer = draw(&mut app, 120, 40);
    let row = u16::try_from(row_of(&buffer, "getFileExtension();").unwrap()).unwrap();
    let column = column_of(&buffer, row, "getFileExtension").unwrap();

    assert_eq!(click(&mut app, column, row), EventResponse::Handled);
    let walkthrough = app.viewer().walkthrough().unwrap();
    assert!(walkthrough.is_expanded(2));
    assert!(!walkthrough.is_expanded(0));

    // A click outside any control does nothing
    assert_eq!(click(&mut app, 0, 1), EventResponse::NotHandled);
}
