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

use crate::blocks::{callout, card, group, numbered, paragraph};
use memlab_core::{Accent, Block, StaticPage};

pub(super) fn page() -> StaticPage {
    StaticPage {
        heading: "📋 Your Practice Requirement".to_string(),
        blocks: vec![
            group(
                "🎯 The Problem Statement",
                Accent::Primary,
                vec![
                    paragraph("You are building a Document Exporter for an office app."),
                    paragraph("Users can export documents in different formats:"),
                    Block::Cards {
                        cards: vec![
                            card(
                                "📕 PDF Exporter",
                                Accent::Pink,
                                &[],
                                &["Generates a .pdf file with headers and footers"],
                            ),
                            card(
                                "📘 Word Exporter",
                                Accent::Blue,
                                &[],
                                &["Generates a .docx file with formatted text"],
                            ),
                            card(
                                "📗 Excel Exporter",
                                Accent::Primary,
                                &[],
                                &["Generates a .xlsx file with tabular data"],
                            ),
                        ],
                    },
                ],
            ),
            group(
                "📝 Requirements",
                Accent::Primary,
                vec![numbered(
                    Accent::Primary,
                    &[
                        "All exporters must have a method: export(String content)",
                        "All exporters must have a method: getFileExtension()",
                        "A Factory should create the right exporter based on a string like \"pdf\", \"word\", \"excel\"",
                        "Client code should NEVER use 'new PdfExporter()' directly",
                        "Adding a new format (e.g., HTML) should be easy — minimal changes",
                    ],
                )],
            ),
            group(
                "🧪 Try it Yourself First!",
                Accent::Primary,
                vec![callout(
                    Some("⏸️ PAUSE HERE — Before looking at the solution, try to:"),
                    Accent::Yellow,
                    &[
                        "1. Create the DocumentExporter interface",
                        "2. Create 3 concrete classes: PdfExporter, WordExporter, ExcelExporter",
                        "3. Create ExporterFactory with a static method",
                        "4. Write a Main class that uses only the factory",
                    ],
                )],
            ),
        ],
    }
}
