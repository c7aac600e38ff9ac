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

use crate::blocks::note;
use memlab_core::{Accent, LineGroup, WalkthroughPage};

pub(super) fn page() -> WalkthroughPage {
    WalkthroughPage {
        heading: "🔬 Line-by-Line Deep Dive".to_string(),
        hint: "Click any line to expand its explanation + JVM memory details".to_string(),
        groups: vec![interface(), pdf_exporter(), factory(), client()],
    }
}

fn interface() -> LineGroup {
    LineGroup {
        title: "📄 DocumentExporter.java — The Interface".to_string(),
        notes: vec![
            note(
                1,
                Accent::Pink,
                "public interface DocumentExporter {",
                "interface = a contract. It says \"any class that signs this contract MUST have these methods.\" \
                 Think of it like a job description — it defines WHAT you must do, but not HOW. \
                 public means any class in any package can see and implement this interface.",
                Some(
                    "Method Area (Metaspace): JVM loads the bytecode of DocumentExporter.interface into the Method Area. \
                     No object is created on the Heap — interfaces don't have instances. \
                     JVM stores the interface's metadata: method signatures export() and getFileExtension().",
                ),
            ),
            note(
                2,
                Accent::Blue,
                "    String export(String content);",
                "This declares: \"Every exporter MUST have an export method that takes a String and returns a String.\" \
                 No body (no curly braces) — because the interface doesn't say HOW, only WHAT. \
                 Each concrete class will write its own body.",
                Some(
                    "This is just a method signature stored in the interface's metadata in Method Area. \
                     No executable code here — it's a slot waiting to be filled by implementing classes.",
                ),
            ),
            note(
                3,
                Accent::Blue,
                "    String getFileExtension();",
                "Same idea — every exporter must tell us its file extension (.pdf, .docx, .xlsx). \
                 Again, no body — just the promise that this method will exist.",
                None,
            ),
        ],
    }
}

fn pdf_exporter() -> LineGroup {
    LineGroup {
        title: "📕 PdfExporter.java — Concrete Class".to_string(),
        notes: vec![
            note(
                1,
                Accent::Primary,
                "public class PdfExporter implements DocumentExporter {",
                "class = a blueprint for creating objects. implements DocumentExporter = \"I am signing the contract. \
                 I PROMISE to have export() and getFileExtension() methods.\" \
                 If you forget even one method, Java compiler will SCREAM at you with an error.",
                Some(
                    "JVM loads PdfExporter.class into Method Area. \
                     It verifies during class loading that ALL interface methods are implemented. \
                     The class's vtable (virtual method table) is created — this is how JVM knows which method to call at runtime (polymorphism).",
                ),
            ),
            note(
                2,
                Accent::Yellow,
                "    @Override",
                "@Override is an annotation — a note to the compiler saying \"I intend to override a method from my parent interface/class.\" \
                 It's optional but HIGHLY recommended. \
                 If you accidentally misspell the method name, @Override will catch the error at compile time instead of at runtime.",
                None,
            ),
            note(
                3,
                Accent::Blue,
                "    public String export(String content) {",
                "This is the ACTUAL implementation. Now we're writing the HOW — how does a PDF export work? \
                 The method takes content (whatever text the user wants to export) and returns a String. \
                 In real life, this would generate actual PDF bytes — we're simplifying with strings.",
                Some(
                    "The method's bytecode is stored in Method Area under PdfExporter's class data. \
                     When called, a new Stack Frame is pushed onto the calling thread's Stack with local variable content.",
                ),
            ),
            note(
                4,
                Accent::Yellow,
                "        return \"[PDF Header] \" + content + \" [PDF Footer]\";",
                "We wrap the content with PDF-specific formatting (header and footer). \
                 The + operator concatenates (joins) the strings together. \
                 In real code, you'd use a PDF library like iText or Apache PDFBox here to generate actual PDF bytes.",
                Some(
                    "String concatenation with + creates new String objects on the Heap. \
                     The JVM internally uses StringBuilder for efficiency: \
                     new StringBuilder(\"[PDF Header] \").append(content).append(\" [PDF Footer]\").toString(). \
                     The returned String object lives on the Heap.",
                ),
            ),
        ],
    }
}

fn factory() -> LineGroup {
    LineGroup {
        title: "🏭 ExporterFactory.java — The Factory".to_string(),
        notes: vec![
            note(
                1,
                Accent::Pink,
                "public class ExporterFactory {",
                "The Factory class. This is the BRAIN of the pattern. \
                 It's the ONLY class that knows about PdfExporter, WordExporter, ExcelExporter. \
                 Nobody else needs to know they exist.",
                None,
            ),
            note(
                2,
                Accent::Primary,
                "    public static DocumentExporter createExporter(String type) {",
                "public — anyone can call this. static — you DON'T need to create an ExporterFactory object to call this method. \
                 You call it directly on the class: ExporterFactory.createExporter(\"pdf\"). \
                 The return type is DocumentExporter (the INTERFACE, not a concrete class!) — this is KEY to the pattern.",
                Some(
                    "static keyword is HUGE in JVM:\n\
                     • Static methods belong to the Class, not to any object\n\
                     • Stored in Method Area (Metaspace) — NOT on the Heap\n\
                     • No this reference — because there's no object\n\
                     • Loaded when the class is first loaded by ClassLoader\n\
                     • Only ONE copy exists regardless of how many times you call it\n\
                     • That's why you call it with ClassName.method() — no object needed",
                ),
            ),
            note(
                3,
                Accent::Pink,
                "        switch (type.toLowerCase()) {",
                "Takes the input string and converts to lowercase (so \"PDF\", \"pdf\", \"Pdf\" all work). \
                 Then the switch statement acts as a DECISION MAKER — it picks which concrete class to instantiate based on the type string.",
                None,
            ),
            note(
                4,
                Accent::Yellow,
                "            case \"pdf\": return new PdfExporter();",
                "If the type is \"pdf\", create a brand new PdfExporter object and return it. \
                 The new keyword triggers: (1) memory allocation on Heap, (2) constructor call, (3) returns the reference. \
                 Notice: the return type is DocumentExporter but we return a PdfExporter — \
                 this works because PdfExporter implements DocumentExporter (IS-A relationship).",
                Some(
                    "When new PdfExporter() executes:\n\
                     1️⃣ JVM checks if PdfExporter class is loaded → if not, ClassLoader loads it into Method Area\n\
                     2️⃣ JVM allocates memory on the Heap for the new object\n\
                     3️⃣ All instance fields set to defaults (none here, but would be 0/null/false)\n\
                     4️⃣ Constructor <init> runs\n\
                     5️⃣ A reference (like a pointer/address) to this Heap object is returned\n\
                     6️⃣ This reference is what gets returned to the caller",
                ),
            ),
            note(
                5,
                Accent::Pink,
                "            default: throw new IllegalArgumentException(...);",
                "If someone passes \"html\" or \"banana\" — we THROW an exception. \
                 This is called \"fail fast\" — crash immediately with a clear error instead of returning null \
                 (which would cause a confusing NullPointerException later). Always handle the default case!",
                Some(
                    "new IllegalArgumentException() creates an Exception object on the Heap. \
                     When thrown, JVM unwinds the Stack — popping frames until it finds a matching catch block. \
                     If none found, the thread dies and JVM prints the stack trace.",
                ),
            ),
        ],
    }
}

fn client() -> LineGroup {
    LineGroup {
        title: "🚀 Main.java — Client Code".to_string(),
        notes: vec![
            note(
                1,
                Accent::Primary,
                "DocumentExporter exporter = ExporterFactory.createExporter(\"pdf\");",
                "This is the MOST important line in the entire pattern! \
                 Look at the left side: DocumentExporter exporter — the variable type is the INTERFACE. Not PdfExporter. \
                 The client doesn't know or care what concrete type it gets. \
                 The right side calls the factory, which returns a PdfExporter, but the client sees it only as a DocumentExporter.",
                Some(
                    "This is where the magic happens in memory:\n\
                     \n\
                     📦 STACK (Main thread, main() frame):\n\
                     ┌──────────────────────────────┐\n\
                     │ exporter → 0x7f3a (reference) │\n\
                     └──────────────────────────────┘\n\
                     \n\
                     📦 HEAP:\n\
                     ┌──────────────────────────────┐\n\
                     │ Address: 0x7f3a              │\n\
                     │ Type: PdfExporter            │\n\
                     │ (actual object lives here)   │\n\
                     └──────────────────────────────┘\n\
                     \n\
                     The variable exporter on the Stack holds a REFERENCE (memory address) pointing to the actual PdfExporter object on the Heap. \
                     The variable type is DocumentExporter (interface) but the actual object is PdfExporter. \
                     This is polymorphism — one variable type, many possible object types.",
                ),
            ),
            note(
                2,
                Accent::Blue,
                "String result = exporter.export(\"My Report Data\");",
                "Calls .export() on the exporter. Even though the variable type is DocumentExporter, JVM calls PdfExporter's export() method. \
                 Why? Because JVM looks at the ACTUAL object type at runtime (dynamic dispatch), not the variable type. \
                 This is polymorphism in action!",
                Some(
                    "Dynamic Dispatch (virtual method invocation):\n\
                     1️⃣ JVM looks at exporter reference → points to 0x7f3a\n\
                     2️⃣ Goes to that Heap address → finds object type is PdfExporter\n\
                     3️⃣ Looks up PdfExporter's vtable (method table)\n\
                     4️⃣ Finds export() → calls PdfExporter.export()\n\
                     5️⃣ New Stack Frame pushed: export(content=\"My Report Data\")\n\
                     6️⃣ Returns String → stored in result variable on Stack",
                ),
            ),
        ],
    }
}
