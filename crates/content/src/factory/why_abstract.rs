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

use crate::blocks::{callout, card, code, group, styled};
use memlab_core::{Accent, Block, StaticPage, Tone};

pub(super) fn page() -> StaticPage {
    StaticPage {
        heading: "🤔 Interface vs Abstract Class — When & Why?".to_string(),
        blocks: vec![
            group(
                "The Big Question: Why did we use interface? When to use abstract class?",
                Accent::Primary,
                vec![Block::Cards {
                    cards: vec![
                        card(
                            "Interface",
                            Accent::Blue,
                            &["100% abstract", "No state", "Multiple inheritance"],
                            &[
                                "• Zero shared code — just method signatures",
                                "• A class can implement multiple interfaces",
                                "• Says: \"WHAT you must do\"",
                                "• Use when classes are unrelated but share behavior",
                                "• Example: Dog and Robot both can move()",
                            ],
                        ),
                        card(
                            "Abstract Class",
                            Accent::Purple,
                            &["Partial code", "Has state", "Single inheritance"],
                            &[
                                "• Can share common code between children",
                                "• A class can extend only one abstract class",
                                "• Says: \"WHAT + partially HOW\"",
                                "• Use when classes are related and share code",
                                "• Example: PdfExporter and WordExporter share logging",
                            ],
                        ),
                    ],
                }],
            ),
            group(
                "🔄 Let's REFACTOR our solution to use Abstract Class",
                Accent::Primary,
                vec![callout(
                    Some("Scenario:"),
                    Accent::Yellow,
                    &[
                        "What if ALL exporters need to log before exporting?",
                        "Instead of copying the same log code in every class, we use an abstract class to share it.",
                    ],
                )],
            ),
            code(
                "REFACTORED: Using Abstract Class — BaseExporter.java",
                &[
                    "// ═══════════════════════════════════════════════════════",
                    "// ABSTRACT CLASS — shares COMMON code between all exporters",
                    "// Think of it as a \"half-finished blueprint\"",
                    "// ═══════════════════════════════════════════════════════",
                    "",
                    "public abstract class BaseExporter implements DocumentExporter {",
                    "",
                    "    // ✅ SHARED STATE — all exporters track export count",
                    "    protected int exportCount = 0;",
                    "",
                    "    // ✅ SHARED METHOD — same for ALL exporters (concrete method)",
                    "    public void log(String message) {",
                    "        System.out.println(\"[LOG] \" + getFileExtension() + \": \" + message);",
                    "    }",
                    "",
                    "    // ✅ TEMPLATE METHOD — defines the SKELETON, children fill the gap",
                    "    @Override",
                    "    public String export(String content) {",
                    "        log(\"Starting export...\");            // shared step",
                    "        String result = doExport(content);     // ← child fills this in",
                    "        exportCount++;                            // shared step",
                    "        log(\"Export #\" + exportCount + \" done!\"); // shared step",
                    "        return result;",
                    "    }",
                    "",
                    "    // ❗ ABSTRACT METHOD — children MUST implement this",
                    "    // This is the \"blank\" that each child fills differently",
                    "    protected abstract String doExport(String content);",
                    "",
                    "    // getFileExtension() is still abstract (from interface)",
                    "    // — each child must define its own extension",
                    "}",
                ],
            ),
            code(
                "PdfExporter.java — Now extends BaseExporter",
                &[
                    "// NOW: PdfExporter extends abstract class instead of implementing interface directly",
                    "// It inherits log(), export(), and exportCount FOR FREE",
                    "",
                    "public class PdfExporter extends BaseExporter {",
                    "",
                    "    // Only need to implement the UNIQUE parts!",
                    "    @Override",
                    "    protected String doExport(String content) {",
                    "        return \"[PDF Header] \" + content + \" [PDF Footer]\";",
                    "    }",
                    "",
                    "    @Override",
                    "    public String getFileExtension() {",
                    "        return \".pdf\";",
                    "    }",
                    "}",
                    "",
                    "// WordExporter and ExcelExporter follow the exact same pattern",
                    "// They extend BaseExporter and only implement doExport() and getFileExtension()",
                ],
            ),
            group(
                "Visual: What each layer provides",
                Accent::Primary,
                vec![
                    callout(
                        Some("DocumentExporter (Interface)"),
                        Accent::Blue,
                        &["Contract: export(), getFileExtension() — NO code"],
                    ),
                    styled("▼ implements", Tone::Muted),
                    callout(
                        Some("BaseExporter (Abstract Class)"),
                        Accent::Purple,
                        &[
                            "Shared: log(), export() template, exportCount field",
                            "Abstract: doExport() — children MUST fill this in",
                        ],
                    ),
                    styled("▼ extends", Tone::Muted),
                    Block::Cards {
                        cards: vec![
                            card("PdfExporter", Accent::Pink, &[], &["Only: doExport() + \".pdf\""]),
                            card("WordExporter", Accent::Blue, &[], &["Only: doExport() + \".docx\""]),
                            card(
                                "ExcelExporter",
                                Accent::Primary,
                                &[],
                                &["Only: doExport() + \".xlsx\""],
                            ),
                        ],
                    },
                ],
            ),
            group(
                "JVM Memory: Abstract Class Object",
                Accent::Primary,
                vec![
                    callout(
                        Some("Can you do new BaseExporter()? ❌ NO!"),
                        Accent::Purple,
                        &[
                            "Abstract classes cannot be instantiated. JVM will throw InstantiationError.",
                            "You can only create objects of concrete (non-abstract) children.",
                        ],
                    ),
                    code(
                        "When you do: new PdfExporter()",
                        &[
                            "HEAP at address 0x2000:",
                            "┌───────────────────────────────────────────────────┐",
                            "│ Object Header: class pointer → PdfExporter.class  │",
                            "│ Fields from BaseExporter:                         │",
                            "│    exportCount = 0  (inherited field)             │",
                            "│ Fields from PdfExporter:                          │",
                            "│    (none in this example)                         │",
                            "│ Methods available (vtable):                       │",
                            "│    log() → from BaseExporter (inherited)          │",
                            "│    export() → from BaseExporter (inherited)       │",
                            "│    doExport() → from PdfExporter (overridden)     │",
                            "│    getFileExtension() → from PdfExporter          │",
                            "└───────────────────────────────────────────────────┘",
                        ],
                    ),
                ],
            ),
            group(
                "🎯 Decision Rule — When to Use What?",
                Accent::Primary,
                vec![
                    decision("Do all concrete classes share ZERO common code?", "→ Use Interface", Accent::Blue),
                    decision(
                        "Do all concrete classes share some common fields or methods?",
                        "→ Use Abstract Class",
                        Accent::Purple,
                    ),
                    decision(
                        "Do you need a class to implement multiple contracts?",
                        "→ Use Interface (Java allows multiple interfaces)",
                        Accent::Blue,
                    ),
                    decision(
                        "Do you need shared constructor logic?",
                        "→ Use Abstract Class (interfaces have no constructors)",
                        Accent::Purple,
                    ),
                    decision(
                        "Best of both worlds?",
                        "→ Interface + Abstract Class (like we did: interface at top, abstract class in middle)",
                        Accent::Primary,
                    ),
                ],
            ),
        ],
    }
}

fn decision(question: &str, answer: &str, accent: Accent) -> Block {
    callout(Some(question), accent, &[answer])
}
