//! Go test function builder.

use crate::builder::{CodeFragment, Renderable};

/// A `func TestX(t *testing.T)` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TestFunc {
    name: String,
    doc: Option<String>,
    body: Vec<CodeFragment>,
}

impl TestFunc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a statement line to the body.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a comment line to the body.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.body.push(CodeFragment::comment(text));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body fragments in order.
    pub fn body(&self) -> &[CodeFragment] {
        &self.body
    }
}

impl Renderable for TestFunc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(2);
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }
        fragments.push(CodeFragment::block(
            format!("func {}(t *testing.T) {{", self.name),
            self.body.clone(),
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(func: &TestFunc) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(func);
        builder.build()
    }

    #[test]
    fn test_empty_test_func() {
        let f = TestFunc::new("TestNothing");
        assert_eq!(render(&f), "func TestNothing(t *testing.T) {\n}\n");
    }

    #[test]
    fn test_func_with_doc_and_body() {
        let f = TestFunc::new("TestRun")
            .doc("TestRun tests the Run function.")
            .line("Run()")
            .comment("TODO: check");

        assert_eq!(
            render(&f),
            "// TestRun tests the Run function.\nfunc TestRun(t *testing.T) {\n\tRun()\n\t// TODO: check\n}\n"
        );
    }

    #[test]
    fn test_accessors() {
        let f = TestFunc::new("TestX").line("X()");
        assert_eq!(f.name(), "TestX");
        assert_eq!(f.body(), [CodeFragment::line("X()")]);
    }
}
