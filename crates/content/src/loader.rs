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

use crate::error::ContentError;
use memlab_core::Lesson;
use std::{fs, path::Path};
use tracing::{debug, info};

/// Read and validate a lesson authored as a TOML file
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Lesson, ContentError> {
    let path = path.as_ref();
    debug!("Loading lesson from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
    let lesson = from_toml_str(&content)?;

    info!(
        title = %lesson.title,
        sections = lesson.sections.len().get(),
        "Loaded lesson from {}",
        path.display()
    );
    Ok(lesson)
}

/// Parse and validate a lesson from TOML text
pub fn from_toml_str(content: &str) -> Result<Lesson, ContentError> {
    let lesson: Lesson = toml::from_str(content)?;
    lesson.validate()?;
    Ok(lesson)
}

/// Render a lesson as TOML, the inverse of [`from_toml_str`]
pub fn to_toml_string(lesson: &Lesson) -> Result<String, ContentError> {
    Ok(toml::to_string_pretty(lesson)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title = "Tiny"

[[sections]]
icon = "🧠"
label = "Memory"

[sections.body]
kind = "scenario"
heading = "Memory"
blurb = "One step"

[[sections.body.steps]]
title = "Step 0"
description = "Nothing yet"
loaded_units = ["Main.class"]
"#;

    #[test]
    fn test_minimal_lesson_uses_defaults() {
        let lesson = from_toml_str(MINIMAL).unwrap();

        assert_eq!(lesson.title, "Tiny");
        assert_eq!(lesson.eyebrow, "");
        let memlab_core::SectionBody::Scenario(scenario) = &lesson.sections[0].body else {
            panic!("expected scenario");
        };
        assert_eq!(scenario.labels.stack, "Stack");
        assert_eq!(scenario.steps[0].loaded_units, vec!["Main.class".to_string()]);
        assert!(scenario.steps[0].stack_frames.is_empty());
    }

    #[test]
    fn test_empty_sections_rejected() {
        let err = from_toml_str("title = \"x\"\nsections = []\n").unwrap_err();
        assert!(matches!(err, ContentError::Toml(_)));
        assert!(err.to_string().contains("section catalog must contain at least one entry"));
    }

    #[test]
    fn test_empty_walkthrough_rejected() {
        let content = r#"
title = "x"

[[sections]]
icon = "🔬"
label = "Lines"

[sections.body]
kind = "walkthrough"
heading = "Lines"
groups = []
"#;
        let err = from_toml_str(content).unwrap_err();
        assert!(matches!(err, ContentError::Catalog(_)));
    }
}
