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


//! Help overlay listing the keyboard shortcuts

use crate::{
    layout::LayoutType,
    ui::{BorderPresets, ColorScheme, Icons},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Help item representing a keyboard shortcut
#[derive(Debug, Clone)]
struct HelpItem {
    keys: &'static str,
    description: &'static str,
    layout_specific: Option<LayoutType>,
}

impl HelpItem {
    const fn any(keys: &'static str, description: &'static str) -> Self {
        Self { keys, description, layout_specific: None }
    }
}

/// Help section grouping related shortcuts
#[derive(Debug, Clone)]
struct HelpSection {
    title: &'static str,
    items: Vec<HelpItem>,
}

/// Help overlay renderer
#[derive(Debug, Default)]
pub struct HelpOverlay {
    scroll_offset: usize,
    content_height: usize,
    viewport_height: usize,
}

impl HelpOverlay {
    /// Create a new help overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the help overlay
    pub fn render(&mut self, frame: &mut Frame<'_>, layout_type: LayoutType, scheme: &ColorScheme) {
        let popup_area = centered_rect(80, 90, frame.area());
        frame.render_widget(Clear, popup_area);

        let help_content = self.content(layout_type, scheme);
        self.content_height = help_content.lines.len();
        self.viewport_height = popup_area.height.saturating_sub(2) as usize;
        self.scroll_down(0);

        let title = format!("{} MemLab Help - {} Layout", Icons::HELP, layout_type.name());
        let help_block = BorderPresets::help(title, scheme.focused_border)
            .title_alignment(Alignment::Center);

        let help_paragraph = Paragraph::new(help_content)
            .block(help_block)
            .style(Style::default().fg(scheme.text).bg(scheme.background))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        frame.render_widget(help_paragraph, popup_area);

        if self.content_height > self.viewport_height {
            self.render_scroll_indicator(frame, popup_area, scheme);
        }
    }

    /// Help text for `layout_type`
    pub fn content(&self, layout_type: LayoutType, scheme: &ColorScheme) -> Text<'static> {
        let mut lines = Vec::new();

        for (i, section) in help_sections().iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }

            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().fg(scheme.yellow).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "─".repeat(section.title.chars().count()),
                Style::default().fg(scheme.border),
            )));

            for item in &section.items {
                if item.layout_specific.is_some_and(|layout| layout != layout_type) {
                    continue;
                }
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:20} ", item.keys),
                        Style::default().fg(scheme.primary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(item.description, Style::default().fg(scheme.text)),
                ]));
            }
        }

        let key = Style::default().fg(scheme.primary).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(scheme.dim);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", text),
            Span::styled("?", key),
            Span::styled(" or ", text),
            Span::styled("ESC", key),
            Span::styled(" to close this help", text),
        ]));

        Text::from(lines)
    }

    fn render_scroll_indicator(&self, frame: &mut Frame<'_>, area: Rect, scheme: &ColorScheme) {
        let scrollable = self.content_height.saturating_sub(self.viewport_height).max(1);
        let scroll_percentage = self.scroll_offset * 100 / scrollable;

        let more_content_below = self.scroll_offset + self.viewport_height < self.content_height;
        let more_content_above = self.scroll_offset > 0;

        let mut indicator_parts = vec![];
        let arrow = Style::default().fg(scheme.yellow);
        if more_content_above {
            indicator_parts.push(Span::styled(format!("{} ", Icons::ARROW_UP), arrow));
        }
        indicator_parts.push(Span::styled(
            format!("{scroll_percentage}%"),
            Style::default().fg(scheme.primary),
        ));
        if more_content_below {
            indicator_parts.push(Span::styled(format!(" {}", Icons::ARROW_DOWN), arrow));
        }
        indicator_parts.push(Span::styled(" (j/k to scroll)", Style::default().fg(scheme.dim)));

        let indicator_line = Line::from(indicator_parts);
        let width = u16::try_from(indicator_line.width()).unwrap_or(area.width).min(area.width);

        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1,
        };

        frame.render_widget(
            Paragraph::new(indicator_line).alignment(Alignment::Right),
            indicator_area,
        );
    }

    /// Scroll up
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down
    pub fn scroll_down(&mut self, amount: usize) {
        let max_scroll = self.content_height.saturating_sub(self.viewport_height);
        self.scroll_offset = (self.scroll_offset + amount).min(max_scroll);
    }

    /// Reset scroll position
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }
}

fn help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Sections",
            items: vec![
                HelpItem::any("Tab / PageDown / ]", "Next section"),
                HelpItem::any("Shift+Tab / PageUp / [", "Previous section"),
                HelpItem::any("1-9", "Jump to section"),
                HelpItem {
                    keys: "Click tab",
                    description: "Jump to section (with --mouse)",
                    layout_specific: Some(LayoutType::Full),
                },
            ],
        },
        HelpSection {
            title: "Memory Steps",
            items: vec![
                HelpItem::any("→ / l", "Next step"),
                HelpItem::any("← / h", "Previous step"),
                HelpItem::any("Home / End", "First / last step"),
                HelpItem::any("g then 0-9", "Jump to that step"),
                HelpItem::any("Click step", "Jump to that step (with --mouse)"),
            ],
        },
        HelpSection {
            title: "Line-by-Line",
            items: vec![
                HelpItem::any("↓ / j", "Focus next line"),
                HelpItem::any("↑ / k", "Focus previous line"),
                HelpItem::any("Enter / Space", "Expand or collapse the focused line"),
                HelpItem::any("Click line", "Expand or collapse it (with --mouse)"),
            ],
        },
        HelpSection {
            title: "View",
            items: vec![
                HelpItem::any("↑/↓ or j/k", "Scroll (outside Line-by-Line)"),
                HelpItem::any("t", "Cycle color theme"),
                HelpItem::any("?", "Show/hide this help screen"),
                HelpItem {
                    keys: "(narrow terminal)",
                    description: "Memory panels are stacked vertically",
                    layout_specific: Some(LayoutType::Mobile),
                },
            ],
        },
        HelpSection {
            title: "Exit",
            items: vec![HelpItem::any("q / Esc / Ctrl+C", "Quit")],
        },
    ]
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
