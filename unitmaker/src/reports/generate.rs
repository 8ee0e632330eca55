//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from test generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package name of the source file.
    pub package: String,

    /// Warnings collected while generating.
    pub warnings: Vec<String>,

    /// Number of test stubs.
    pub stubs: usize,

    /// Number of type placeholders.
    pub placeholders: usize,

    /// Number of declarations with no output.
    pub skipped: usize,

    /// What happened to the test file.
    pub result: GenerationResult,
}

/// Result of test generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The test file was written.
    Written { path: PathBuf },
    /// The test file already existed and was kept.
    Skipped { path: PathBuf },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { path } => {
                self.render_summary(out);
                out.key_value("Generated", &path.display().to_string());
            }
            GenerationResult::Skipped { path } => {
                out.key_value(
                    "Skipped",
                    &format!("{} already exists", path.display()),
                );
            }
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content.trim_end_matches('\n'));
                out.divider("Summary");
                self.render_summary(out);
            }
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.package);
        out.key_value(
            "Tests",
            &format!(
                "{} stubs, {} placeholders, {} skipped declarations",
                self.stubs, self.placeholders, self.skipped
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered lines.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn key_value(&mut self, key: &str, value: &str) {
            self.0.push(format!("{key}: {value}"));
        }

        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning: {msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.0.push(format!("-- {label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package: "sample".into(),
            warnings: vec!["method 'Len' is stubbed as a plain function".into()],
            stubs: 2,
            placeholders: 1,
            skipped: 0,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = Recorder::default();
        report(GenerationResult::Written {
            path: "math_test.go".into(),
        })
        .render(&mut out);

        assert_eq!(
            out.0,
            [
                "warning: method 'Len' is stubbed as a plain function",
                "Package: sample",
                "Tests: 2 stubs, 1 placeholders, 0 skipped declarations",
                "Generated: math_test.go",
            ]
        );
    }

    #[test]
    fn test_render_skipped() {
        let mut out = Recorder::default();
        report(GenerationResult::Skipped {
            path: "math_test.go".into(),
        })
        .render(&mut out);

        assert_eq!(out.0.last().unwrap(), "Skipped: math_test.go already exists");
    }

    #[test]
    fn test_render_preview() {
        let mut out = Recorder::default();
        report(GenerationResult::Preview {
            path: "math_test.go".into(),
            content: "package sample\n".into(),
        })
        .render(&mut out);

        assert_eq!(out.0[1], "-- math_test.go");
        assert_eq!(out.0[2], "package sample");
        assert_eq!(out.0[3], "-- Summary");
    }
}
