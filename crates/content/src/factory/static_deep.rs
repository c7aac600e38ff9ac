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

use crate::blocks::{card, code, group, heading};
use memlab_core::{Accent, Block, StaticPage};

const RULES: [(&str, &str, &str); 5] = [
    ("1️⃣", "static methods belong to the CLASS, not to objects", "Called via ClassName.method() — no 'new' needed"),
    (
        "2️⃣",
        "static methods have NO 'this' reference",
        "Because there's no object — 'this' means 'current object' which doesn't exist",
    ),
    (
        "3️⃣",
        "static methods CAN'T access instance variables/methods directly",
        "They don't have an object, so there's no object's data to access",
    ),
    (
        "4️⃣",
        "static methods are loaded when class is loaded by ClassLoader",
        "Available immediately — no need to construct anything first",
    ),
    (
        "5️⃣",
        "Only ONE copy of static method in memory",
        "Shared across all calls — lives in Method Area, not duplicated on Heap",
    ),
];

pub(super) fn page() -> StaticPage {
    StaticPage {
        heading: "⚡ Static Method — Deep Dive in JVM".to_string(),
        blocks: vec![
            group(
                "Why is the factory method static?",
                Accent::Primary,
                vec![Block::Cards {
                    cards: vec![
                        card(
                            "Without static (instance method)",
                            Accent::Pink,
                            &[],
                            &[
                                "// You'd have to write:",
                                "ExporterFactory factory = new ExporterFactory();",
                                "DocumentExporter exp = factory.createExporter(\"pdf\");",
                                "",
                                "// ❌ Creating a factory OBJECT just to call one method?",
                                "// ❌ Wasteful! Factory has NO state to store",
                                "// ❌ Extra object on the Heap for no reason",
                            ],
                        ),
                        card(
                            "With static ✅",
                            Accent::Primary,
                            &[],
                            &[
                                "// Just call it directly on the class:",
                                "DocumentExporter exp = ExporterFactory.createExporter(\"pdf\");",
                                "",
                                "// ✅ No factory object needed",
                                "// ✅ Clean and simple",
                                "// ✅ No Heap allocation for factory",
                            ],
                        ),
                    ],
                }],
            ),
            group(
                "JVM: Static vs Instance — What Lives Where?",
                Accent::Primary,
                vec![code(
                    "JVM MEMORY LAYOUT:",
                    &[
                        "┌─── METHOD AREA (Metaspace) ───────────────────┐",
                        "│  ExporterFactory.class                         │",
                        "│    ├─ static createExporter() ← lives HERE     │",
                        "│    ├─ Class metadata                           │",
                        "│    └─ Constant pool                            │",
                        "└────────────────────────────────────────────────┘",
                        "",
                        "┌─── HEAP ──────────────────────────────────────┐",
                        "│  No ExporterFactory object here!               │",
                        "│  Static method doesn't need an object.         │",
                        "│                                                │",
                        "│  0x2000: PdfExporter object ← created BY the   │",
                        "│          static method, lives here             │",
                        "└────────────────────────────────────────────────┘",
                        "",
                        "┌─── STACK (main thread) ───────────────────────┐",
                        "│  main() frame:                                 │",
                        "│    exporter → 0x2000 (reference to Heap)       │",
                        "└────────────────────────────────────────────────┘",
                    ],
                )],
            ),
            group(
                "Static Method — 5 Key Rules to Remember",
                Accent::Primary,
                RULES
                    .iter()
                    .map(|(icon, rule, detail)| Block::Callout {
                        title: Some(format!("{icon} {rule}")),
                        accent: Accent::Primary,
                        lines: vec![detail.to_string()],
                    })
                    .collect(),
            ),
            heading("When to use \"static\" for factory method vs not?", Accent::Primary),
            Block::Cards {
                cards: vec![
                    card(
                        "Use static when:",
                        Accent::Primary,
                        &[],
                        &[
                            "• Factory has NO state (fields) to store",
                            "• Simple creation logic (switch/map)",
                            "• No configuration needed",
                            "• 90% of simple factories = static",
                        ],
                    ),
                    card(
                        "Use non-static when:",
                        Accent::Purple,
                        &[],
                        &[
                            "• Factory has configuration state",
                            "• Factory needs dependency injection",
                            "• Factory itself is from an Abstract Factory",
                            "• You need multiple factory instances",
                        ],
                    ),
                ],
            },
        ],
    }
}
