//! GoFile abstraction for structured Go file generation.

use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a Go source file.
///
/// Renders as the package clause, the imports, then the body fragments in
/// the order they were added. Spacing inside the body is left to the caller.
///
/// # Example
///
/// ```
/// use unitmaker_codegen::{builder::CodeFragment, go::GoFile};
///
/// let src = GoFile::new("sample")
///     .import("testing")
///     .add(&CodeFragment::comment("nothing yet"))
///     .render();
///
/// assert_eq!(src, "package sample\n\nimport \"testing\"\n\n// nothing yet\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoFile {
    package: String,
    imports: Vec<String>,
    body: Vec<CodeFragment>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add an import path.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable + ?Sized>(mut self, node: &R) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Render with gofmt indentation (tabs).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::GO)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        builder
            .push_line(&format!("package {}", self.package))
            .push_blank();

        for path in &self.imports {
            builder.push_line(&format!("import \"{}\"", path));
        }
        if !self.imports.is_empty() {
            builder.push_blank();
        }

        builder.emit(self.body.as_slice());
        builder.build()
    }
}
