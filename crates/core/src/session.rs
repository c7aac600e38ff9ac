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

//! Viewer session: section navigation composed with per-section state
//!
//! The [`SectionNavigator`] only knows which section is active. The
//! [`Viewer`] owns what each mounted section carries (a step player, a set of
//! expandable entries) and decides, through the [`RemountPolicy`], what
//! happens to that state when the learner leaves a section.

use crate::{
    catalog::{Lesson, SectionBody, SectionDescriptor},
    entry::Walkthrough,
    error::CatalogError,
    navigation::{SectionNavigator, StepPlayer},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

/// Nested state owned by a mounted section
#[derive(Debug, Clone)]
pub enum SectionState {
    /// Static sections carry no state
    Static,
    /// A memory scenario and its step player
    Scenario(StepPlayer),
    /// A walkthrough and its entry toggles
    Walkthrough(Walkthrough),
}

impl SectionBody {
    /// Fresh state for this section: step 0, every entry collapsed
    pub fn mount(&self) -> SectionState {
        match self {
            Self::Static(_) => SectionState::Static,
            Self::Scenario(scenario) => {
                SectionState::Scenario(StepPlayer::new(scenario.steps.clone()))
            }
            Self::Walkthrough(page) => {
                SectionState::Walkthrough(Walkthrough::new(page.entry_count()))
            }
        }
    }
}

/// What happens to a section's nested state when another section is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemountPolicy {
    /// Leaving a section unmounts it; returning starts from scratch
    #[default]
    Reset,
    /// Every visited section keeps its state for the whole session
    Preserve,
}

impl RemountPolicy {
    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Preserve => "preserve",
        }
    }
}

impl fmt::Display for RemountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RemountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "preserve" => Ok(Self::Preserve),
            other => Err(format!("unknown remount policy '{other}' (expected reset or preserve)")),
        }
    }
}

/// Discrete user input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", content = "index", rename_all = "snake_case")]
pub enum Input {
    /// Select section `i` (clamped)
    SelectSection(i64),
    /// Select the following section
    NextSection,
    /// Select the preceding section
    PreviousSection,
    /// Select step `i` of the active scenario (clamped)
    SelectStep(i64),
    /// Advance the active scenario by one step
    NextStep,
    /// Rewind the active scenario by one step
    PreviousStep,
    /// Toggle entry `i` of the active walkthrough
    ToggleEntry(usize),
    /// Move walkthrough focus down
    FocusNextEntry,
    /// Move walkthrough focus up
    FocusPreviousEntry,
    /// Toggle the focused walkthrough entry
    ToggleFocusedEntry,
}

/// Result of applying an [`Input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// State changed; the view must be recomposed
    Changed,
    /// The input was valid here but changed nothing (e.g. next at the end)
    Unchanged,
    /// The active section has nothing this input could act on
    NotApplicable,
}

impl From<bool> for InputOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// One learner's session over a lesson
#[derive(Debug)]
pub struct Viewer {
    lesson: Lesson,
    navigator: SectionNavigator,
    policy: RemountPolicy,
    /// State of the active section
    active: SectionState,
    /// States of inactive sections kept by [`RemountPolicy::Preserve`]
    parked: Vec<Option<SectionState>>,
}

impl Viewer {
    /// Validate `lesson` and mount its first section
    pub fn new(lesson: Lesson, policy: RemountPolicy) -> Result<Self, CatalogError> {
        lesson.validate()?;

        let navigator = SectionNavigator::new(lesson.sections.clone());
        let active = navigator.current().body.mount();
        let parked = vec![None; navigator.len()];
        debug!(sections = navigator.len(), %policy, "Viewer created");

        Ok(Self { lesson, navigator, policy, active, parked })
    }

    /// Apply one input to completion
    pub fn apply(&mut self, input: Input) -> InputOutcome {
        let outcome = match input {
            Input::SelectSection(target) => self.select_section(target),
            Input::NextSection => self.next_section(),
            Input::PreviousSection => self.previous_section(),
            Input::SelectStep(target) => self.with_player(|player| player.jump_to(target)),
            Input::NextStep => self.with_player(StepPlayer::next),
            Input::PreviousStep => self.with_player(StepPlayer::previous),
            Input::ToggleEntry(index) => self.with_walkthrough(|w| w.toggle(index)),
            Input::FocusNextEntry => self.with_walkthrough(Walkthrough::focus_next),
            Input::FocusPreviousEntry => self.with_walkthrough(Walkthrough::focus_previous),
            Input::ToggleFocusedEntry => self.with_walkthrough(Walkthrough::toggle_focused),
        };
        debug!(?input, ?outcome, section = self.navigator.index(), "Input applied");
        outcome
    }

    /// Select section `clamp(target)`; re-selecting the active one keeps its state
    pub fn select_section(&mut self, target: i64) -> InputOutcome {
        let previous = self.navigator.index();
        if !self.navigator.jump_to(target) {
            return InputOutcome::Unchanged;
        }
        let current = self.navigator.index();

        let incoming = self.parked[current]
            .take()
            .unwrap_or_else(|| self.navigator.current().body.mount());
        let outgoing = std::mem::replace(&mut self.active, incoming);

        match self.policy {
            RemountPolicy::Reset => {
                debug!(section = previous, "Section unmounted");
                drop(outgoing);
            }
            RemountPolicy::Preserve => {
                debug!(section = previous, "Section parked");
                self.parked[previous] = Some(outgoing);
            }
        }

        InputOutcome::Changed
    }

    /// Select the following section, if any
    pub fn next_section(&mut self) -> InputOutcome {
        self.select_section(self.signed_section_index().saturating_add(1))
    }

    /// Select the preceding section, if any
    pub fn previous_section(&mut self) -> InputOutcome {
        self.select_section(self.signed_section_index().saturating_sub(1))
    }

    /// The lesson being viewed
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// The section navigator
    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    /// The active section's descriptor
    pub fn active_section(&self) -> &SectionDescriptor {
        self.navigator.current()
    }

    /// The active section's nested state
    pub fn active_state(&self) -> &SectionState {
        &self.active
    }

    /// The active section's step player, if it is a scenario
    pub fn step_player(&self) -> Option<&StepPlayer> {
        match &self.active {
            SectionState::Scenario(player) => Some(player),
            _ => None,
        }
    }

    /// The active section's entries, if it is a walkthrough
    pub fn walkthrough(&self) -> Option<&Walkthrough> {
        match &self.active {
            SectionState::Walkthrough(walkthrough) => Some(walkthrough),
            _ => None,
        }
    }

    /// The remount policy in effect
    pub fn policy(&self) -> RemountPolicy {
        self.policy
    }

    fn with_player(&mut self, f: impl FnOnce(&mut StepPlayer) -> bool) -> InputOutcome {
        match &mut self.active {
            SectionState::Scenario(player) => f(player).into(),
            _ => InputOutcome::NotApplicable,
        }
    }

    fn with_walkthrough(&mut self, f: impl FnOnce(&mut Walkthrough) -> bool) -> InputOutcome {
        match &mut self.active {
            SectionState::Walkthrough(walkthrough) => f(walkthrough).into(),
            _ => InputOutcome::NotApplicable,
        }
    }

    fn signed_section_index(&self) -> i64 {
        i64::try_from(self.navigator.index()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        LineGroup, LineNote, PanelLabels, Scenario, SectionCatalog, StaticPage, StepCatalog,
        StepRecord, WalkthroughPage,
    };

    fn step(title: &str) -> StepRecord {
        StepRecord {
            title: title.to_string(),
            description: String::new(),
            stack_frames: vec![],
            heap_objects: vec![],
            loaded_units: vec![],
            annotations: vec![],
            key_insight: None,
        }
    }

    fn note(line: u32) -> LineNote {
        LineNote {
            line,
            code: format!("line {line}"),
            explanation: String::new(),
            runtime_note: None,
            accent: Default::default(),
        }
    }

    fn section(label: &str, body: SectionBody) -> SectionDescriptor {
        SectionDescriptor { icon: String::new(), label: label.to_string(), body }
    }

    /// Static, scenario (3 steps), walkthrough (2 entries)
    fn lesson() -> Lesson {
        let scenario = Scenario {
            heading: "Memory".into(),
            blurb: String::new(),
            labels: PanelLabels::default(),
            steps: StepCatalog::new(vec![step("s0"), step("s1"), step("s2")]).unwrap(),
        };
        let walkthrough = WalkthroughPage {
            heading: "Lines".into(),
            hint: String::new(),
            groups: vec![LineGroup { title: "A.java".into(), notes: vec![note(1), note(2)] }],
        };
        let sections = SectionCatalog::new(vec![
            section(
                "Intro",
                SectionBody::Static(StaticPage { heading: "Intro".into(), blocks: vec![] }),
            ),
            section("Memory", SectionBody::Scenario(scenario)),
            section("Lines", SectionBody::Walkthrough(walkthrough)),
        ])
        .unwrap();

        Lesson { eyebrow: String::new(), title: "Test".into(), subtitle: String::new(), sections }
    }

    fn step_index(viewer: &Viewer) -> usize {
        viewer.step_player().map(StepPlayer::index).unwrap()
    }

    #[test]
    fn test_step_inputs_not_applicable_on_static_section() {
        let mut viewer = Viewer::new(lesson(), RemountPolicy::Reset).unwrap();

        assert_eq!(viewer.apply(Input::NextStep), InputOutcome::NotApplicable);
        assert_eq!(viewer.apply(Input::ToggleEntry(0)), InputOutcome::NotApplicable);
    }

    #[test]
    fn test_reset_policy_remounts_at_step_zero() {
        let mut viewer = Viewer::new(lesson(), RemountPolicy::Reset).unwrap();

        viewer.apply(Input::SelectSection(1));
        assert_eq!(viewer.apply(Input::SelectStep(2)), InputOutcome::Changed);
        viewer.apply(Input::NextSection);
        viewer.apply(Input::PreviousSection);

        assert_eq!(step_index(&viewer), 0);
    }

    #[test]
    fn test_preserve_policy_keeps_step_and_entries() {
        let mut viewer = Viewer::new(lesson(), RemountPolicy::Preserve).unwrap();

        viewer.apply(Input::SelectSection(1));
        viewer.apply(Input::SelectStep(2));
        viewer.apply(Input::NextSection);
        viewer.apply(Input::ToggleEntry(1));
        viewer.apply(Input::SelectSection(0));
        viewer.apply(Input::SelectSection(1));
        assert_eq!(step_index(&viewer), 2);

        viewer.apply(Input::SelectSection(2));
        let walkthrough = viewer.walkthrough().unwrap();
        assert!(!walkthrough.is_expanded(0));
        assert!(walkthrough.is_expanded(1));
    }

    #[test]
    fn test_reselecting_active_section_keeps_state() {
        let mut viewer = Viewer::new(lesson(), RemountPolicy::Reset).unwrap();

        viewer.apply(Input::SelectSection(1));
        viewer.apply(Input::NextStep);
        assert_eq!(viewer.apply(Input::SelectSection(1)), InputOutcome::Unchanged);
        assert_eq!(step_index(&viewer), 1);
    }

    #[test]
    fn test_remount_policy_parse() {
        assert_eq!("Preserve".parse::<RemountPolicy>(), Ok(RemountPolicy::Preserve));
        assert_eq!(RemountPolicy::default().to_string(), "reset");
        assert!("sticky".parse::<RemountPolicy>().is_err());
    }

    #[test]
    fn test_input_serde_shape() {
        let json = serde_json::to_string(&Input::SelectStep(3)).unwrap();
        assert_eq!(json, r#"{"input":"select_step","index":3}"#);
        let back: Input = serde_json::from_str(r#"{"input":"next_section"}"#).unwrap();
        assert_eq!(back, Input::NextSection);
    }
}
