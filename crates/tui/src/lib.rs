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


//! Terminal User Interface for MemLab
//!
//! This crate hosts a [`memlab_core::Viewer`] in the terminal: it recomposes
//! the view after every input, paints it with ratatui and turns key presses,
//! clicks and wheel events back into viewer inputs.

mod app;
mod config;
mod layout;
mod paint;
mod ui;

pub use app::{App, EventResponse};
pub use config::{Config, DisplayConfig, NavigationConfig};
pub use layout::{LayoutManager, LayoutType};
pub use paint::{Painted, Painter};
pub use ui::{
    BorderPresets, ColorScheme, EnhancedBorder, EnhancedBorderStyle, HelpOverlay, Icons,
    StatusBar, StepStatus, Theme,
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use futures::{FutureExt, StreamExt};
use memlab_core::Viewer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::{select, time::interval};
use tracing::{debug, info};

/// Configuration for the TUI runner
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Terminal refresh interval
    pub refresh_interval: Duration,
    /// Enable mouse support
    pub enable_mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { refresh_interval: Duration::from_millis(50), enable_mouse: false }
    }
}

impl From<&Config> for TuiConfig {
    fn from(config: &Config) -> Self {
        Self {
            refresh_interval: Duration::from_millis(config.display.refresh_interval_ms.max(1)),
            enable_mouse: config.display.mouse,
        }
    }
}

/// Main TUI runner that manages the terminal interface and event loop
pub struct Tui {
    /// The application state
    app: App,
    /// Terminal backend for rendering and input handling
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Configuration settings for the TUI behavior
    config: TuiConfig,
}

impl Tui {
    /// Take over the terminal
    pub fn new(app: App, config: TuiConfig) -> Result<Self> {
        info!("Initializing TUI with config: {:?}", config);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.enable_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(Self { app, terminal, config })
    }

    /// Run the main TUI event loop
    pub async fn run(mut self) -> Result<()> {
        info!("Starting TUI event loop");

        let mut event_stream = EventStream::new();
        let mut ticker = interval(self.config.refresh_interval);

        let result = loop {
            if let Err(e) = self.terminal.draw(|frame| self.app.render(frame)) {
                break Err(e.into());
            }

            select! {
                event_result = event_stream.next() => {
                    match event_result {
                        Some(Ok(Event::Mouse(first_mouse_event))) if self.config.enable_mouse => {
                            let mut mouse_events = vec![first_mouse_event];
                            let mut deferred = None;

                            // Batch consecutive mouse events (wheel scrolling floods the stream)
                            while let Some(Some(Ok(event))) = event_stream.next().now_or_never() {
                                match event {
                                    Event::Mouse(mouse_event) => mouse_events.push(mouse_event),
                                    other => {
                                        deferred = Some(other);
                                        break;
                                    }
                                }
                            }

                            self.app.handle_mouse_batch(mouse_events);

                            if let Some(event) = deferred {
                                if self.handle_event(event) {
                                    break Ok(());
                                }
                            }
                        }
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                break Ok(());
                            }
                        }
                        Some(Err(e)) => break Err(e.into()),
                        None => {
                            info!("Terminal event stream closed");
                            break Ok(());
                        }
                    }
                }

                // Periodic redraw
                _ = ticker.tick() => {}
            }

            if self.app.should_exit() {
                info!("App requested exit");
                break Ok(());
            }
        };

        info!("TUI event loop ended");
        result
    }

    // Handle one non-batched event, returning true if the app should exit
    fn handle_event(&mut self, event: Event) -> bool {
        debug!("Received event: {:?}", event);
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(width, height) => {
                debug!("Terminal resized: {}x{}", width, height);
                self.app.handle_resize(width, height);
                false
            }
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match self.app.handle_key_event(key_event) {
            EventResponse::Exit => {
                info!("Exit requested");
                true
            }
            EventResponse::Handled => false,
            EventResponse::NotHandled => {
                debug!("Ignored key event: {:?}", key_event);
                false
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        if self.config.enable_mouse {
            let _ =
                execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Public API for the TUI module
pub mod api {
    use super::*;

    /// Run `viewer` in the terminal until the learner quits
    pub async fn start_tui(viewer: Viewer, config: Config) -> Result<()> {
        let tui_config = TuiConfig::from(&config);
        let tui = Tui::new(App::new(viewer, config), tui_config)?;
        tui.run().await
    }
}
