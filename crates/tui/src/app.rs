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


//! Main application state and event handling
//!
//! [`App`] owns the [`Viewer`] and everything that only matters on a
//! terminal: theme, scroll offset, help overlay, click targets. Every frame
//! recomposes the view from the viewer and repaints it.

use crate::{
    config::Config,
    layout::LayoutManager,
    paint::{action_at, row_action_at, Hit, Painter},
    ui::{BorderPresets, ColorScheme, HelpOverlay, Icons, StatusBar, Theme},
};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use memlab_core::{compose, Button, Header, Input, InputOutcome, View, Viewer};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::mem;
use tracing::{debug, info};

/// Lines moved per mouse wheel notch
const WHEEL_STEP: usize = 3;

/// Response from event handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Event was handled, no further action needed
    Handled,
    /// Event was not handled (or does not apply to the active section)
    NotHandled,
    /// Request application exit
    Exit,
}

/// Clickable regions recorded during the last render
#[derive(Debug, Default)]
struct HitMap {
    tabs: (Rect, Vec<Hit>),
    pager: (Rect, Vec<Hit>),
    /// Body viewport, the scroll it was drawn at and its regions by painted row
    body: (Rect, usize, Vec<(usize, Hit)>),
}

impl HitMap {
    fn input_at(&self, x: u16, y: u16) -> Option<Input> {
        let strip = [&self.tabs, &self.pager].into_iter().find_map(|(area, hits)| {
            if y != area.y || x < area.x || x >= area.right() {
                return None;
            }
            action_at(hits, x - area.x)
        });
        strip.or_else(|| {
            let (area, scroll, hits) = &self.body;
            if !area.contains(Position::new(x, y)) {
                return None;
            }
            row_action_at(hits, scroll + usize::from(y - area.y), x - area.x)
        })
    }
}

/// Main application state
pub struct App {
    viewer: Viewer,
    config: Config,
    scheme: ColorScheme,
    layout_manager: LayoutManager,
    help: HelpOverlay,
    show_help: bool,
    /// First visible body line
    scroll: usize,
    /// Painted body height and viewport height of the last render
    body_lines: usize,
    body_height: usize,
    /// Bring the focused entry into view on the next render
    follow_focus: bool,
    hits: HitMap,
    /// `g` was pressed and the next digit picks a step
    step_pending: bool,
    should_exit: bool,
}

impl App {
    /// Create the application around a ready viewer
    pub fn new(viewer: Viewer, config: Config) -> Self {
        let scheme = config.theme.into();
        Self {
            viewer,
            config,
            scheme,
            layout_manager: LayoutManager::new(),
            help: HelpOverlay::new(),
            show_help: false,
            scroll: 0,
            body_lines: 0,
            body_height: 0,
            follow_focus: false,
            hits: HitMap::default(),
            step_pending: false,
            should_exit: false,
        }
    }

    /// The presentation state
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// First visible body line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether the help overlay is open
    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Whether the app wants to exit
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Apply one input to the viewer
    pub fn apply(&mut self, input: Input) -> EventResponse {
        let section = self.viewer.navigator().index();
        let outcome = self.viewer.apply(input);

        if self.viewer.navigator().index() != section {
            self.scroll = 0;
        }
        match outcome {
            InputOutcome::Changed => {
                self.follow_focus = true;
                EventResponse::Handled
            }
            InputOutcome::Unchanged => EventResponse::Handled,
            InputOutcome::NotApplicable => EventResponse::NotHandled,
        }
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) -> EventResponse {
        if key.kind != KeyEventKind::Press {
            return EventResponse::NotHandled;
        }

        debug!("Key pressed: {:?}", key);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.exit();
        }

        if self.show_help {
            return self.handle_help_key(key);
        }

        if mem::take(&mut self.step_pending) {
            if let KeyCode::Char(c @ '0'..='9') = key.code {
                let index = c.to_digit(10).map_or(0, i64::from);
                return self.apply(Input::SelectStep(index));
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit(),
            KeyCode::Char('?') => {
                self.show_help = true;
                EventResponse::Handled
            }
            KeyCode::Char('t') => {
                let theme = self.config.cycle_theme();
                self.scheme = theme.into();
                EventResponse::Handled
            }

            // Sections
            KeyCode::Tab | KeyCode::PageDown | KeyCode::Char(']') => {
                self.apply(Input::NextSection)
            }
            KeyCode::BackTab | KeyCode::PageUp | KeyCode::Char('[') => {
                self.apply(Input::PreviousSection)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let position = c.to_digit(10).map_or(1, i64::from);
                self.apply(Input::SelectSection(position - 1))
            }

            // Steps
            KeyCode::Right | KeyCode::Char('l') => self.apply(Input::NextStep),
            KeyCode::Left | KeyCode::Char('h') => self.apply(Input::PreviousStep),
            KeyCode::Char('g') if self.viewer.step_player().is_some() => {
                self.step_pending = true;
                EventResponse::Handled
            }
            KeyCode::Home => {
                if self.viewer.step_player().is_some() {
                    self.apply(Input::SelectStep(0))
                } else {
                    self.scroll = 0;
                    EventResponse::Handled
                }
            }
            KeyCode::End => {
                if self.viewer.step_player().is_some() {
                    self.apply(Input::SelectStep(i64::MAX))
                } else {
                    self.scroll = self.max_scroll();
                    EventResponse::Handled
                }
            }

            // Entries, or plain scrolling outside a walkthrough
            KeyCode::Down | KeyCode::Char('j') => {
                if self.viewer.walkthrough().is_some() {
                    self.apply(Input::FocusNextEntry)
                } else {
                    self.scroll_down(1);
                    EventResponse::Handled
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.viewer.walkthrough().is_some() {
                    self.apply(Input::FocusPreviousEntry)
                } else {
                    self.scroll_up(1);
                    EventResponse::Handled
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(Input::ToggleFocusedEntry),

            _ => EventResponse::NotHandled,
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) -> EventResponse {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => {
                self.show_help = false;
                self.help.reset_scroll();
            }
            KeyCode::Char('q') => return self.exit(),
            KeyCode::Down | KeyCode::Char('j') => self.help.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.help.scroll_up(1),
            KeyCode::PageDown => self.help.scroll_down(10),
            KeyCode::PageUp => self.help.scroll_up(10),
            _ => {}
        }
        EventResponse::Handled
    }

    /// Handle a run of mouse events collected in one go
    pub fn handle_mouse_batch(&mut self, events: Vec<MouseEvent>) -> EventResponse {
        let mut response = EventResponse::NotHandled;
        for event in events {
            let handled = match event.kind {
                MouseEventKind::ScrollDown if self.show_help => {
                    self.help.scroll_down(WHEEL_STEP);
                    EventResponse::Handled
                }
                MouseEventKind::ScrollUp if self.show_help => {
                    self.help.scroll_up(WHEEL_STEP);
                    EventResponse::Handled
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_down(WHEEL_STEP);
                    EventResponse::Handled
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_up(WHEEL_STEP);
                    EventResponse::Handled
                }
                MouseEventKind::Down(MouseButton::Left) if !self.show_help => {
                    match self.hits.input_at(event.column, event.row) {
                        Some(action) => self.apply(action),
                        None => EventResponse::NotHandled,
                    }
                }
                _ => EventResponse::NotHandled,
            };
            if handled == EventResponse::Handled {
                response = EventResponse::Handled;
            }
        }
        response
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.layout_manager.update_size(width, height);
        info!("Layout changed to {:?} ({}x{})", self.layout_manager.layout_type(), width, height);
    }

    fn exit(&mut self) -> EventResponse {
        self.should_exit = true;
        EventResponse::Exit
    }

    fn max_scroll(&self) -> usize {
        self.body_lines.saturating_sub(self.body_height)
    }

    fn scroll_down(&mut self, amount: usize) {
        self.scroll = (self.scroll + amount).min(self.max_scroll());
    }

    fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Render one frame
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let known = (self.layout_manager.width(), self.layout_manager.height());
        if (area.width, area.height) != known {
            self.layout_manager.update_size(area.width, area.height);
        }

        let view = compose(&self.viewer);
        let background = Block::default().style(Style::default().bg(self.scheme.background));
        frame.render_widget(background, area);

        let status_height = u16::from(self.config.display.status_bar);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(status_height),
            ])
            .split(area);

        self.render_header(frame, chunks[0], &view.header);
        self.render_tabs(frame, chunks[1], &view.tabs);
        self.render_body(frame, chunks[2], &view);
        self.render_pager(frame, chunks[3], &view);
        if self.config.display.status_bar {
            self.render_status_bar(frame, chunks[4]);
        }

        if self.show_help {
            self.help.render(frame, self.layout_manager.layout_type(), &self.scheme);
        }
    }

    fn render_header(&self, frame: &mut Frame<'_>, area: Rect, header: &Header) {
        let lines = vec![
            Line::styled(
                header.eyebrow.clone(),
                Style::default().fg(self.scheme.pink).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                header.title.clone(),
                Style::default().fg(self.scheme.text).add_modifier(Modifier::BOLD),
            ),
            Line::styled(header.subtitle.clone(), Style::default().fg(self.scheme.dim)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_tabs(&mut self, frame: &mut Frame<'_>, area: Rect, tabs: &[Button]) {
        let strip = Painter::new(&self.scheme, &self.layout_manager).tabs(tabs, area.width);
        frame.render_widget(Paragraph::new(strip.line), area);
        self.hits.tabs = (area, strip.hits);
    }

    fn render_body(&mut self, frame: &mut Frame<'_>, area: Rect, view: &View) {
        let title = view.tabs.iter().find(|tab| tab.selected).map_or_else(String::new, |tab| {
            format!("{}/{} {}", view.pager.position, view.pager.total, tab.label)
        });
        let block = BorderPresets::body(
            !self.show_help,
            title,
            self.scheme.focused_border,
            self.scheme.border,
        );
        let inner = block.inner(area);

        let painted =
            Painter::new(&self.scheme, &self.layout_manager).paint(&view.body, inner.width);
        self.body_lines = painted.lines.len();
        self.body_height = usize::from(inner.height);

        if self.follow_focus {
            if let Some(row) = painted.focus_row {
                if row < self.scroll {
                    self.scroll = row;
                } else if row >= self.scroll + self.body_height {
                    self.scroll = row + 1 - self.body_height.max(1);
                }
            }
            self.follow_focus = false;
        }
        self.scroll = self.scroll.min(self.max_scroll());

        self.hits.body = (inner, self.scroll, painted.hits);

        let offset = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(painted.lines)
                .block(block)
                .style(Style::default().fg(self.scheme.text))
                .scroll((offset, 0)),
            area,
        );

        if self.max_scroll() > 0 {
            self.render_scroll_indicator(frame, area);
        }
    }

    fn render_scroll_indicator(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut text = String::from(" ");
        if self.scroll > 0 {
            text.push_str(Icons::ARROW_UP);
        }
        if self.scroll < self.max_scroll() {
            text.push_str(Icons::ARROW_DOWN);
        }
        text.push_str(&format!(" {}% ", self.scroll * 100 / self.max_scroll().max(1)));

        let width = u16::try_from(text.chars().count()).unwrap_or(area.width).min(area.width);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(width + 2),
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(self.scheme.yellow))),
            indicator_area,
        );
    }

    fn render_pager(&mut self, frame: &mut Frame<'_>, area: Rect, view: &View) {
        let strip = Painter::new(&self.scheme, &self.layout_manager).pager(&view.pager, area.width);
        frame.render_widget(Paragraph::new(strip.line), area);
        self.hits.pager = (area, strip.hits);
    }

    fn render_status_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let section = self.viewer.active_section();
        let mut status = StatusBar::new().section(
            self.viewer.navigator().index() + 1,
            self.viewer.navigator().len(),
            section.label.clone(),
        );

        if let Some(player) = self.viewer.step_player() {
            status = status.step(player.index(), player.len());
        }
        if let Some(walkthrough) = self.viewer.walkthrough() {
            let expanded = (0..walkthrough.len()).filter(|i| walkthrough.is_expanded(*i)).count();
            status = status.entries(expanded, walkthrough.len());
        }

        let line = status
            .layout(self.layout_manager.layout_type().name())
            .remount(self.viewer.policy().name())
            .theme(self.config.theme.description())
            .message("? help")
            .build();

        frame.render_widget(
            Paragraph::new(line)
                .style(Style::default().fg(self.scheme.status_fg).bg(self.scheme.status_bg)),
            area,
        );
    }
}
