//! Test file generation from a parsed Go source file.

use std::collections::HashSet;

use unitmaker_go::{Declaration, SourceFile};

use crate::{
    builder::{CodeFragment, Indent},
    go::GoFile,
    placeholder::generate_placeholder,
    stub::generate_stub,
};

/// Import path of the Go testing package.
pub const TESTING_IMPORT: &str = "testing";

/// Options controlling generated output.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Indentation of function bodies.
    pub indent: Indent,
}

/// Counts and notable findings from one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Test stubs emitted, one per function or method.
    pub stubs: usize,
    /// Type placeholders emitted.
    pub placeholders: usize,
    /// Declarations that produce no output (imports, constants, variables).
    pub skipped: usize,
    /// Methods that were stubbed as if they were plain functions.
    pub methods: Vec<String>,
    /// Test names emitted more than once.
    pub duplicates: Vec<String>,
}

/// Output of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedTests {
    /// Full text of the test file.
    pub content: String,
    pub stats: GenerateStats,
}

/// Walks the declarations of a source file and assembles its test file.
///
/// The walk is a single pass in declaration order: every declaration is
/// visited exactly once and nothing is reordered or deduplicated.
pub struct Generator<'a> {
    source: &'a SourceFile,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the test file.
    pub fn generate(&self) -> GeneratedTests {
        let mut stats = GenerateStats::default();
        let mut seen = HashSet::new();
        let mut file = GoFile::new(&self.source.package).import(TESTING_IMPORT);

        for decl in &self.source.declarations {
            match decl {
                Declaration::Function(function) => {
                    let stub = generate_stub(function);
                    if !seen.insert(stub.name().to_string()) {
                        stats.duplicates.push(stub.name().to_string());
                    }
                    if function.is_method() {
                        stats.methods.push(function.name.clone());
                    }
                    stats.stubs += 1;
                    file = file.add(&stub).add(&CodeFragment::Blank);
                }
                Declaration::Type(decl) => {
                    stats.placeholders += 1;
                    file = file.add(&CodeFragment::line(generate_placeholder(decl)));
                }
                Declaration::Other(_) => stats.skipped += 1,
            }
        }

        GeneratedTests {
            content: file.render_with_indent(self.options.indent),
            stats,
        }
    }

    /// Generate and return only the file text.
    pub fn render(&self) -> String {
        self.generate().content
    }
}
