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


//! Painting render trees into terminal lines
//!
//! [`Painter`] flattens a [`Node`] into styled [`Line`]s no wider than the
//! target width. Panels are drawn as text boxes rather than nested ratatui
//! widgets so that an arbitrarily deep tree scrolls as one paragraph.

use crate::{
    layout::{LayoutManager, LayoutType},
    ui::{BoxGlyphs, ColorScheme, EnhancedBorderStyle, Icons},
};
use memlab_core::{Button, EntryView, Input, Node, Pager, Panel, PanelId, Tone};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::mem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Smallest width a panel is still boxed at
const MIN_BOX_WIDTH: usize = 6;

/// Lines painted from a node
#[derive(Debug, Default)]
pub struct Painted {
    /// The lines, top to bottom
    pub lines: Vec<Line<'static>>,
    /// Row of the focused entry, if one was painted
    pub focus_row: Option<usize>,
    /// Clickable regions, keyed by row
    pub hits: Vec<(usize, Hit)>,
}

impl Painted {
    fn append(&mut self, other: Self) {
        if let Some(row) = other.focus_row {
            self.focus_row.get_or_insert(self.lines.len() + row);
        }
        let top = self.lines.len();
        self.hits.extend(other.hits.into_iter().map(|(row, hit)| (top + row, hit)));
        self.lines.extend(other.lines);
    }

    /// Input under column `x` of row `row`
    pub fn action_at(&self, row: usize, x: u16) -> Option<Input> {
        row_action_at(&self.hits, row, x)
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }
}

/// A clickable span of one painted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// First column, relative to the line
    pub start: u16,
    /// One past the last column
    pub end: u16,
    /// Input the region triggers
    pub action: Input,
}

/// A painted one-line control strip and its click targets
#[derive(Debug, Default)]
pub struct Strip {
    /// The painted line
    pub line: Line<'static>,
    /// Click targets on that line
    pub hits: Vec<Hit>,
}

impl Strip {
    fn push(&mut self, text: String, style: Style, action: Option<Input>) {
        let start = self.line.width();
        let end = start + text.width();
        if let Some(action) = action {
            self.hits.push(Hit { start: to_u16(start), end: to_u16(end), action });
        }
        self.line.spans.push(Span::styled(text, style));
    }
}

/// Action of the region covering column `x`
pub fn action_at(hits: &[Hit], x: u16) -> Option<Input> {
    hits.iter().find(|hit| (hit.start..hit.end).contains(&x)).map(|hit| hit.action)
}

/// Action of the region covering column `x` of painted row `row`
pub fn row_action_at(hits: &[(usize, Hit)], row: usize, x: u16) -> Option<Input> {
    hits.iter()
        .find(|(hit_row, hit)| *hit_row == row && (hit.start..hit.end).contains(&x))
        .map(|(_, hit)| hit.action)
}

/// Turns render trees into lines for one color scheme and layout
pub struct Painter<'a> {
    scheme: &'a ColorScheme,
    layout: &'a LayoutManager,
}

impl<'a> Painter<'a> {
    /// A painter drawing with `scheme` for the current layout
    pub fn new(scheme: &'a ColorScheme, layout: &'a LayoutManager) -> Self {
        Self { scheme, layout }
    }

    /// Paint a section body at `width` columns
    pub fn paint(&self, node: &Node, width: u16) -> Painted {
        self.node(node, usize::from(width).max(1), 0)
    }

    fn node(&self, node: &Node, width: usize, depth: usize) -> Painted {
        match node {
            Node::Column { children } => self.column(children, width, depth, depth == 0),
            Node::Row { children } => self.row(children, width, depth),
            Node::Heading { text, accent } => self.wrapped(
                text,
                Style::default().fg(self.scheme.accent(*accent)).add_modifier(Modifier::BOLD),
                width,
            ),
            Node::Text { text, accent, tone } => {
                let mut style = Style::default().fg(self.scheme.text);
                if let Some(accent) = accent {
                    style = style.fg(self.scheme.accent(*accent));
                }
                match tone {
                    Tone::Normal => self.wrapped(text, style, width),
                    Tone::Strong => self.wrapped(text, style.add_modifier(Modifier::BOLD), width),
                    Tone::Muted => {
                        let muted = if accent.is_some() { style } else { style.fg(self.scheme.dim) };
                        self.wrapped(text, muted, width)
                    }
                    Tone::Mono => self.mono(text, style, width),
                }
            }
            Node::Panel(panel) => self.panel(panel, width, depth),
            Node::Buttons { buttons } => self.buttons(buttons, width),
            Node::Code { title, lines } => self.code(title, lines, width),
            Node::Entry(entry) => self.entry(entry, width),
        }
    }

    fn column(&self, children: &[Node], width: usize, depth: usize, spaced: bool) -> Painted {
        let mut out = Painted::default();
        for (i, child) in children.iter().enumerate() {
            if spaced && i > 0 {
                out.push(Line::default());
            }
            out.append(self.node(child, width, depth + 1));
        }
        out
    }

    fn row(&self, children: &[Node], width: usize, depth: usize) -> Painted {
        let count = children.len();
        if count <= 1 || !self.layout.fits_side_by_side(count, to_u16(width)) {
            return self.column(children, width, depth, false);
        }

        let room = width - (count - 1);
        let columns: Vec<(usize, Painted)> = children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let column_width = room / count + usize::from(i < room % count);
                (column_width, self.node(child, column_width, depth + 1))
            })
            .collect();

        let height = columns.iter().map(|(_, painted)| painted.lines.len()).max().unwrap_or(0);
        let mut out = Painted {
            focus_row: columns.iter().find_map(|(_, painted)| painted.focus_row),
            ..Default::default()
        };
        let mut left = 0;
        for (column_width, painted) in &columns {
            let shift = to_u16(left);
            out.hits.extend(painted.hits.iter().map(|&(row, hit)| (row, shifted(hit, shift))));
            left += column_width + 1;
        }
        for row in 0..height {
            let mut spans = Vec::new();
            for (i, (column_width, painted)) in columns.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let line = painted.lines.get(row).cloned().unwrap_or_default();
                spans.extend(pad(line, *column_width).spans);
            }
            out.push(Line::from(spans));
        }
        out
    }

    fn wrapped(&self, text: &str, style: Style, width: usize) -> Painted {
        Painted {
            lines: wrap(text, width).into_iter().map(|line| Line::styled(line, style)).collect(),
            ..Default::default()
        }
    }

    fn mono(&self, text: &str, style: Style, width: usize) -> Painted {
        Painted {
            lines: text
                .split('\n')
                .flat_map(|line| hard_wrap(line, width))
                .map(|line| Line::styled(line, style))
                .collect(),
            ..Default::default()
        }
    }

    fn panel(&self, panel: &Panel, width: usize, depth: usize) -> Painted {
        let color = self.scheme.accent(panel.accent);
        let inner = width.saturating_sub(4);

        let mut body = Painted::default();
        for child in &panel.children {
            body.append(self.node(child, inner.max(1), depth + 1));
        }
        if let Some(footer) = &panel.footer {
            let style = Style::default().fg(self.scheme.dim).add_modifier(Modifier::ITALIC);
            body.append(self.wrapped(footer, style, inner.max(1)));
        }

        self.boxed(&panel.title, panel_style(panel.id), Style::default().fg(color), body, width)
    }

    /// Draw `body` (already painted at `width - 4`) inside a titled box
    fn boxed(
        &self,
        title: &str,
        style: EnhancedBorderStyle,
        border: Style,
        body: Painted,
        width: usize,
    ) -> Painted {
        let title_style = border.add_modifier(Modifier::BOLD);
        if width < MIN_BOX_WIDTH {
            let mut out = self.wrapped(title, title_style, width);
            out.append(body);
            return out;
        }

        let glyphs = style.glyphs();
        let inner = width - 4;
        let mut out = Painted {
            focus_row: body.focus_row.map(|row| row + 1),
            hits: body.hits.iter().map(|&(row, hit)| (row + 1, shifted(hit, 2))).collect(),
            ..Default::default()
        };

        out.push(top_border(title, &glyphs, border, title_style, width));
        for line in body.lines {
            let mut spans = vec![Span::styled(format!("{} ", glyphs.vertical), border)];
            spans.extend(pad(line, inner).spans);
            spans.push(Span::styled(format!(" {}", glyphs.vertical), border));
            out.push(Line::from(spans));
        }
        let bottom = format!(
            "{}{}{}",
            glyphs.bottom_left,
            glyphs.horizontal.to_string().repeat(width - 2),
            glyphs.bottom_right
        );
        out.push(Line::styled(bottom, border));
        out
    }

    fn buttons(&self, buttons: &[Button], width: usize) -> Painted {
        let mut out = Painted::default();
        let mut current = Vec::new();
        let mut used = 0;

        for button in buttons {
            let text = truncate(&format!("[ {} ]", button.label), width);
            let text_width = text.width();
            if used > 0 && used + 1 + text_width > width {
                out.push(Line::from(mem::take(&mut current)));
                used = 0;
            }
            if used > 0 {
                current.push(Span::raw(" "));
                used += 1;
            }
            if button.enabled {
                let (start, end) = (to_u16(used), to_u16(used + text_width));
                out.hits.push((out.lines.len(), Hit { start, end, action: button.action }));
            }
            current.push(Span::styled(text, self.button_style(button)));
            used += text_width;
        }
        if !current.is_empty() {
            out.push(Line::from(current));
        }
        out
    }

    /// Style of a button in its current state
    pub fn button_style(&self, button: &Button) -> Style {
        if button.selected {
            Style::default()
                .fg(self.scheme.primary)
                .bg(self.scheme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else if button.enabled {
            Style::default().fg(self.scheme.text)
        } else {
            Style::default().fg(self.scheme.disabled)
        }
    }

    fn code(&self, title: &str, lines: &[String], width: usize) -> Painted {
        let inner = width.saturating_sub(4).max(1);
        let gutter = lines.len().to_string().len();
        let number_style = Style::default().fg(self.scheme.dim);
        let code_style = Style::default().fg(self.scheme.text);

        let mut body = Painted::default();
        for (number, line) in lines.iter().enumerate() {
            let room = inner.saturating_sub(gutter + 2).max(1);
            for (i, piece) in hard_wrap(line, room).into_iter().enumerate() {
                let label = if i == 0 {
                    format!("{:>gutter$}  ", number + 1)
                } else {
                    " ".repeat(gutter + 2)
                };
                body.push(Line::from(vec![
                    Span::styled(label, number_style),
                    Span::styled(piece, code_style),
                ]));
            }
        }

        let border = Style::default().fg(self.scheme.border);
        self.boxed(title, EnhancedBorderStyle::Square, border, body, width)
    }

    fn entry(&self, entry: &EntryView, width: usize) -> Painted {
        let accent = self.scheme.accent(entry.accent);
        let marker = if entry.focused { Icons::FOCUS } else { " " };
        let chevron = if entry.expanded { Icons::EXPANDED } else { Icons::COLLAPSED };

        let prefix = vec![
            Span::styled(format!("{marker} "), Style::default().fg(self.scheme.primary)),
            Span::styled(format!("{chevron} "), Style::default().fg(accent)),
            Span::styled(
                format!("{:>3}", entry.number),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        let prefix_width: usize = prefix.iter().map(Span::width).sum();
        let room = width.saturating_sub(prefix_width).max(1);
        let code_style = Style::default().fg(self.scheme.text);

        let mut out = Painted { focus_row: entry.focused.then_some(0), ..Default::default() };
        let toggle = Hit { start: 0, end: to_u16(width), action: Input::ToggleEntry(entry.index) };
        for (i, piece) in hard_wrap(&entry.code, room).into_iter().enumerate() {
            out.hits.push((i, toggle));
            let mut spans =
                if i == 0 { prefix.clone() } else { vec![Span::raw(" ".repeat(prefix_width))] };
            spans.push(Span::styled(piece, code_style));
            let mut line = Line::from(spans);
            if entry.focused {
                line = highlight(line, self.scheme.selection_bg, width);
            }
            out.push(line);
        }

        if let Some(detail) = &entry.detail {
            let indent = prefix_width.min(width.saturating_sub(1));
            let room = width.saturating_sub(indent).max(1);

            let plain = Style::default().fg(self.scheme.yellow).add_modifier(Modifier::BOLD);
            out.append(self.labeled(
                &format!("{} Plain English:", Icons::PLAIN_ENGLISH),
                plain,
                &detail.explanation,
                indent,
                room,
            ));

            if let Some(note) = &detail.runtime_note {
                let runtime = Style::default().fg(self.scheme.purple).add_modifier(Modifier::BOLD);
                out.append(self.labeled(
                    &format!("{} JVM Memory:", Icons::RUNTIME),
                    runtime,
                    note,
                    indent,
                    room,
                ));
            }
            out.push(Line::default());
        }
        out
    }

    fn labeled(
        &self,
        label: &str,
        label_style: Style,
        body: &str,
        indent: usize,
        room: usize,
    ) -> Painted {
        let margin = " ".repeat(indent);
        let mut out = Painted::default();
        for line in wrap(label, room) {
            out.push(Line::from(vec![Span::raw(margin.clone()), Span::styled(line, label_style)]));
        }
        for line in wrap(body, room) {
            out.push(Line::from(vec![
                Span::raw(margin.clone()),
                Span::styled(line, Style::default().fg(self.scheme.text)),
            ]));
        }
        out
    }

    /// Section tabs, labels shortened to what the layout allows
    pub fn tabs(&self, tabs: &[Button], width: u16) -> Strip {
        let count = tabs.len().max(1);
        let slot = (usize::from(width) / count).saturating_sub(3).max(1);
        let separator = Style::default().fg(self.scheme.border);

        let mut strip = Strip::default();
        for (i, tab) in tabs.iter().enumerate() {
            if i > 0 {
                strip.push("│".to_string(), separator, None);
            }
            let label = match self.layout.layout_type() {
                LayoutType::Full => tab.label.clone(),
                LayoutType::Compact => truncate(&tab.label, slot),
                LayoutType::Mobile if tab.selected => tab.label.clone(),
                LayoutType::Mobile => {
                    tab.label.split_whitespace().next().unwrap_or(tab.label.as_str()).to_string()
                }
            };
            let style = if tab.selected {
                self.button_style(tab).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.scheme.dim)
            };
            strip.push(format!(" {label} "), style, Some(tab.action));
        }
        strip
    }

    /// Previous/next controls with one dot per section
    pub fn pager(&self, pager: &Pager, width: u16) -> Strip {
        let previous = format!(" {} ", pager.previous.label);
        let next = format!(" {} ", pager.next.label);
        let dots: Vec<&str> = (1..=pager.total)
            .map(|i| if i == pager.position { Icons::DOT_ACTIVE } else { Icons::DOT_INACTIVE })
            .collect();
        let middle = format!("{}  {}/{}", dots.join(" "), pager.position, pager.total);

        let used = previous.width() + middle.width() + next.width();
        let fill = usize::from(width).saturating_sub(used);
        let (left, right) = (fill / 2, fill - fill / 2);

        let mut strip = Strip::default();
        let enabled = |button: &Button| button.enabled.then_some(button.action);
        strip.push(previous, self.button_style(&pager.previous), enabled(&pager.previous));
        strip.push(" ".repeat(left), Style::default(), None);
        strip.push(middle, Style::default().fg(self.scheme.dim), None);
        strip.push(" ".repeat(right), Style::default(), None);
        strip.push(next, self.button_style(&pager.next), enabled(&pager.next));
        strip
    }
}

/// `hit` moved `by` columns to the right
fn shifted(hit: Hit, by: u16) -> Hit {
    Hit { start: hit.start.saturating_add(by), end: hit.end.saturating_add(by), ..hit }
}

/// Box style of a panel
fn panel_style(id: Option<PanelId>) -> EnhancedBorderStyle {
    match id {
        Some(PanelId::KeyInsight) => EnhancedBorderStyle::Double,
        Some(PanelId::Connections) => EnhancedBorderStyle::Thick,
        _ => EnhancedBorderStyle::Rounded,
    }
}

/// `╭─ title ───╮` spanning exactly `width` columns
fn top_border(
    title: &str,
    glyphs: &BoxGlyphs,
    border: Style,
    title_style: Style,
    width: usize,
) -> Line<'static> {
    let horizontal = glyphs.horizontal.to_string();
    if title.is_empty() {
        let top = horizontal.repeat(width - 2);
        return Line::styled(format!("{}{top}{}", glyphs.top_left, glyphs.top_right), border);
    }

    let title = truncate(title, width - MIN_BOX_WIDTH);
    let fill = width - 5 - title.width();
    Line::from(vec![
        Span::styled(format!("{}{horizontal} ", glyphs.top_left), border),
        Span::styled(title, title_style),
        Span::styled(format!(" {}{}", horizontal.repeat(fill), glyphs.top_right), border),
    ])
}

/// Word-wrap `text` to `width` columns; embedded newlines start new lines
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if word_width > width {
                if line_width > 0 {
                    out.push(mem::take(&mut line));
                }
                let mut pieces = hard_wrap(word, width);
                line = pieces.pop().unwrap_or_default();
                line_width = line.width();
                out.extend(pieces);
                continue;
            }
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        out.push(line);
    }
    out
}

/// Split `text` every `width` columns, keeping whitespace as is
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if line_width > 0 && line_width + char_width > width {
            out.push(mem::take(&mut line));
            line_width = 0;
        }
        line.push(c);
        line_width += char_width;
    }
    out.push(line);
    out
}

/// Cut `text` to `width` columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push('…');
    out
}

fn pad(mut line: Line<'static>, width: usize) -> Line<'static> {
    let missing = width.saturating_sub(line.width());
    if missing > 0 {
        line.spans.push(Span::raw(" ".repeat(missing)));
    }
    line
}

/// Paint the whole line, padded to `width`, on `background`
fn highlight(line: Line<'static>, background: Color, width: usize) -> Line<'static> {
    let fill = Style::default().bg(background);
    let missing = width.saturating_sub(line.width());
    let mut spans: Vec<Span<'static>> =
        line.spans.into_iter().map(|span| span.patch_style(fill)).collect();
    if missing > 0 {
        spans.push(Span::styled(" ".repeat(missing), fill));
    }
    Line::from(spans)
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memlab_core::Accent;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn manager(width: u16) -> LayoutManager {
        let mut layout = LayoutManager::new();
        layout.update_size(width, 40);
        layout
    }

    fn panel(title: &str, lines: &[&str]) -> Node {
        Node::Panel(Panel {
            id: None,
            title: title.to_string(),
            accent: Accent::Blue,
            children: lines.iter().map(|line| Node::text(*line)).collect(),
            footer: None,
        })
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 4), vec![""]);
    }

    #[test]
    fn test_hard_wrap_keeps_indentation() {
        assert_eq!(hard_wrap("    x = 1;", 6), vec!["    x ", "= 1;"]);
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("Memory", 10), "Memory");
        assert_eq!(truncate("Line-by-Line", 6), "Line-…");
        assert!(truncate("📦 Heap (Objects)", 5).width() <= 5);
    }

    #[test]
    fn test_panel_is_boxed_at_exact_width() {
        let scheme = ColorScheme::default();
        let layout = manager(100);
        let painted = Painter::new(&scheme, &layout).paint(&panel("Stack", &["main()"]), 20);

        assert_eq!(painted.lines.len(), 3);
        assert!(plain(&painted.lines[0]).starts_with("╭─ Stack "));
        assert_eq!(plain(&painted.lines[1]), "│ main()           │");
        for line in &painted.lines {
            assert_eq!(line.width(), 20);
        }
    }

    #[test]
    fn test_row_side_by_side_when_wide() {
        let scheme = ColorScheme::default();
        let row = Node::Row { children: vec![panel("A", &["a"]), panel("B", &["b"])] };

        let wide = manager(100);
        let painted = Painter::new(&scheme, &wide).paint(&row, 60);
        assert_eq!(painted.lines.len(), 3);
        assert!(plain(&painted.lines[1]).contains("│ a"));
        assert!(plain(&painted.lines[1]).contains("│ b"));

        let narrow = manager(60);
        let painted = Painter::new(&scheme, &narrow).paint(&row, 58);
        assert_eq!(painted.lines.len(), 6);
    }

    #[test]
    fn test_pager_hits_only_enabled_buttons() {
        let scheme = ColorScheme::default();
        let layout = manager(100);
        let button = |label: &str, enabled, action| Button {
            label: label.to_string(),
            selected: false,
            enabled,
            action,
        };
        let pager = Pager {
            position: 1,
            total: 3,
            previous: button("← Previous", false, Input::PreviousSection),
            next: button("Next →", true, Input::NextSection),
        };

        let strip = Painter::new(&scheme, &layout).pager(&pager, 60);
        assert_eq!(strip.line.width(), 60);
        assert_eq!(action_at(&strip.hits, 1), None);
        assert_eq!(action_at(&strip.hits, 58), Some(Input::NextSection));
    }

    #[test]
    fn test_step_buttons_clickable_inside_boxed_row() {
        let scheme = ColorScheme::default();
        let layout = manager(100);
        let step = |index: i64| Button {
            label: format!("Step {index}"),
            selected: index == 0,
            enabled: true,
            action: Input::SelectStep(index),
        };
        let steps = Node::Panel(Panel {
            id: None,
            title: "Steps".to_string(),
            accent: Accent::Primary,
            children: vec![Node::Buttons { buttons: vec![step(0), step(1)] }],
            footer: None,
        });
        let row = Node::Row { children: vec![panel("A", &["a"]), steps] };

        let painted = Painter::new(&scheme, &layout).paint(&row, 60);
        // Second column starts at 31, its box content two further in
        assert_eq!(painted.action_at(1, 33), Some(Input::SelectStep(0)));
        assert_eq!(painted.action_at(1, 45), Some(Input::SelectStep(1)));
        assert_eq!(painted.action_at(1, 3), None);
        assert_eq!(painted.action_at(0, 33), None);
    }

    #[test]
    fn test_entry_rows_toggle_their_entry() {
        let scheme = ColorScheme::default();
        let layout = manager(100);
        let entry = Node::Entry(EntryView {
            index: 4,
            number: 7,
            code: "Exporter e = new PdfExporter();".to_string(),
            accent: Accent::Blue,
            expanded: false,
            focused: false,
            detail: None,
        });

        let painted = Painter::new(&scheme, &layout).paint(&entry, 40);
        assert_eq!(painted.action_at(0, 0), Some(Input::ToggleEntry(4)));
        assert_eq!(painted.action_at(0, 39), Some(Input::ToggleEntry(4)));
        assert_eq!(painted.action_at(1, 0), None);
    }
}
