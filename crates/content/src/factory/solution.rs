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

use crate::blocks::code;
use memlab_core::StaticPage;

const RULE: &str = "// ═══════════════════════════════════════════════════════";

pub(super) fn page() -> StaticPage {
    StaticPage {
        heading: "✅ Complete Solution".to_string(),
        blocks: vec![
            code(
                "DocumentExporter.java — The Interface (Contract)",
                &[
                    RULE,
                    "// STEP 1: Define WHAT every exporter must be able to do",
                    "// This is the CONTRACT / BLUEPRINT / MENU",
                    RULE,
                    "",
                    "public interface DocumentExporter {",
                    "",
                    "    String export(String content);",
                    "",
                    "    String getFileExtension();",
                    "}",
                ],
            ),
            code(
                "PdfExporter.java — Concrete Product #1",
                &[
                    RULE,
                    "// STEP 2a: A REAL exporter — knows HOW to export as PDF",
                    RULE,
                    "",
                    "public class PdfExporter implements DocumentExporter {",
                    "",
                    "    @Override",
                    "    public String export(String content) {",
                    "        return \"[PDF Header] \" + content + \" [PDF Footer]\";",
                    "    }",
                    "",
                    "    @Override",
                    "    public String getFileExtension() {",
                    "        return \".pdf\";",
                    "    }",
                    "}",
                ],
            ),
            code(
                "WordExporter.java — Concrete Product #2",
                &concrete_product("WordExporter", "[Word Doc] ", " [End of Doc]", ".docx"),
            ),
            code(
                "ExcelExporter.java — Concrete Product #3",
                &concrete_product("ExcelExporter", "[Excel Sheet] | ", " |", ".xlsx"),
            ),
            code(
                "ExporterFactory.java — The Factory (Brain)",
                &[
                    RULE,
                    "// STEP 3: The FACTORY — the only place that uses 'new'",
                    RULE,
                    "",
                    "public class ExporterFactory {",
                    "",
                    "    public static DocumentExporter createExporter(String type) {",
                    "",
                    "        switch (type.toLowerCase()) {",
                    "            case \"pdf\":",
                    "                return new PdfExporter();",
                    "            case \"word\":",
                    "                return new WordExporter();",
                    "            case \"excel\":",
                    "                return new ExcelExporter();",
                    "            default:",
                    "                throw new IllegalArgumentException(",
                    "                    \"Unknown export type: \" + type",
                    "                );",
                    "        }",
                    "    }",
                    "}",
                ],
            ),
            code(
                "Main.java — Client Code",
                &[
                    RULE,
                    "// STEP 4: Client — clean, simple, decoupled",
                    RULE,
                    "",
                    "public class Main {",
                    "    public static void main(String[] args) {",
                    "",
                    "        // Client NEVER writes: new PdfExporter()",
                    "        DocumentExporter exporter = ExporterFactory.createExporter(\"pdf\");",
                    "",
                    "        String result = exporter.export(\"My Report Data\");",
                    "        System.out.println(result);",
                    "        // Output: [PDF Header] My Report Data [PDF Footer]",
                    "",
                    "        System.out.println(exporter.getFileExtension());",
                    "        // Output: .pdf",
                    "    }",
                    "}",
                ],
            ),
        ],
    }
}

/// Source of an exporter that only differs by its wrapping and extension
fn concrete_product(class: &str, prefix: &str, suffix: &str, extension: &str) -> Vec<String> {
    vec![
        format!("public class {class} implements DocumentExporter {{"),
        String::new(),
        "    @Override".to_string(),
        "    public String export(String content) {".to_string(),
        format!("        return \"{prefix}\" + content + \"{suffix}\";"),
        "    }".to_string(),
        String::new(),
        "    @Override".to_string(),
        "    public String getFileExtension() {".to_string(),
        format!("        return \"{extension}\";"),
        "    }".to_string(),
        "}".to_string(),
    ]
}
