//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Text buffer that tracks the current indentation level.
///
/// # Example
///
/// ```
/// use unitmaker_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("run()")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n\trun()\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::go();
        builder.push_line("x := 1");
        assert_eq!(builder.build(), "x := 1\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder
            .push_line("func main() {")
            .push_indent()
            .push_line("run()")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "func main() {\n    run()\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder
            .push_dedent()
            .push_dedent()
            .push_line("a()")
            .push_indent()
            .push_line("b()");
        assert_eq!(builder.build(), "a()\n\tb()\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::go();
        builder
            .push_indent()
            .push_line("a()")
            .push_blank()
            .push_line("b()");

        assert_eq!(builder.build(), "\ta()\n\n\tb()\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_comment("TODO: fill in");
        assert_eq!(builder.build(), "\t// TODO: fill in\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("comment"),
                    CodeFragment::line("x := 1"),
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\nx := 1\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "func main() {",
                    vec![
                        CodeFragment::line("run()"),
                        CodeFragment::comment("done"),
                    ],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "func main() {\n\trun()\n\t// done\n}\n");
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::go();
        builder.apply_fragment(CodeFragment::block(
            "header",
            vec![CodeFragment::line("body")],
            None,
        ));
        assert_eq!(builder.build(), "header\n\tbody\n");
    }
}
