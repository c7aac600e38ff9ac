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


//! Status line shown at the bottom of the screen

/// Where the step player sits in its scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// On step 0
    Start,
    /// Somewhere in the middle
    Playing,
    /// On the last step
    End,
}

impl StepStatus {
    /// Classify `index` within a scenario of `len` steps
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Start
        } else if index + 1 >= len {
            Self::End
        } else {
            Self::Playing
        }
    }

    /// Get the icon for this status
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Start => "⏮",
            Self::Playing => "▶",
            Self::End => "⏭",
        }
    }
}

/// Status bar builder
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    section: Option<(usize, usize, String)>,
    step: Option<(usize, usize)>,
    entries: Option<(usize, usize)>,
    layout: Option<String>,
    remount: Option<String>,
    theme: Option<String>,
    messages: Vec<String>,
}

impl StatusBar {
    /// Create a new status bar builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active section, `position` is 1-based
    pub fn section(mut self, position: usize, total: usize, label: impl Into<String>) -> Self {
        self.section = Some((position, total, label.into()));
        self
    }

    /// Set the current step, `index` is 0-based
    pub fn step(mut self, index: usize, len: usize) -> Self {
        self.step = Some((index, len));
        self
    }

    /// Set how many line explanations are open
    pub fn entries(mut self, expanded: usize, total: usize) -> Self {
        self.entries = Some((expanded, total));
        self
    }

    /// Set the layout name
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Set the remount policy name
    pub fn remount(mut self, policy: impl Into<String>) -> Self {
        self.remount = Some(policy.into());
        self
    }

    /// Set the theme name
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Add a status message
    pub fn message<S: Into<String>>(mut self, msg: S) -> Self {
        self.messages.push(msg.into());
        self
    }

    /// Build the complete status line
    pub fn build(&self) -> String {
        let mut parts = Vec::new();

        if let Some((position, total, label)) = &self.section {
            parts.push(format!("§ {position}/{total} {label}"));
        }

        if let Some((index, len)) = self.step {
            let status = StepStatus::of(index, len);
            parts.push(format!("{} Step {index}/{}", status.icon(), len.saturating_sub(1)));
        }

        if let Some((expanded, total)) = self.entries {
            parts.push(format!("Open: {expanded}/{total}"));
        }

        if let Some(layout) = &self.layout {
            parts.push(format!("Layout: {layout}"));
        }

        if let Some(remount) = &self.remount {
            parts.push(format!("Remount: {remount}"));
        }

        if let Some(theme) = &self.theme {
            parts.push(format!("{} {theme}", crate::ui::Icons::THEME));
        }

        parts.extend(self.messages.iter().cloned());

        parts.join(" | ")
    }
}
