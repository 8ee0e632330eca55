//! Generate operation - test stubs from a parsed Go file.

use std::path::Path;

use eyre::{Context, Result};
use unitmaker_codegen::{GenerateStats, Generator, GeneratorOptions, Indent};
use unitmaker_core::{File, FileRules, Overwrite, WriteResult, is_test_file, test_file_path};
use unitmaker_go::GoSource;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Explicit output path; derived from the source path when absent.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// What to do when the test file already exists.
    pub overwrite: Overwrite,
    /// Indentation of generated function bodies.
    pub indent: Indent,
}

/// Execute the generate operation.
///
/// Builds the whole test file in memory, then writes it in a single step
/// unless this is a dry run.
pub fn generate(source: &GoSource, opts: GenerateOptions) -> Result<GenerateReport> {
    let path = opts
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| test_file_path(source.path()));

    let generated = Generator::new(source.source_file())
        .with_options(GeneratorOptions {
            indent: opts.indent,
        })
        .generate();

    let mut warnings = Vec::new();
    if is_test_file(source.path()) {
        warnings.push(format!(
            "'{}' is already a test file",
            source.path().display()
        ));
    }
    warnings.extend(collect_warnings(&generated.stats));

    let result = if opts.dry_run {
        GenerationResult::Preview {
            path,
            content: generated.content,
        }
    } else {
        let file = File::new(&path, generated.content).with_rules(FileRules {
            overwrite: opts.overwrite,
        });
        match file.write().wrap_err("Failed to generate tests")? {
            WriteResult::Written => GenerationResult::Written { path },
            WriteResult::Skipped => GenerationResult::Skipped { path },
        }
    };

    Ok(GenerateReport {
        package: source.source_file().package.clone(),
        warnings,
        stubs: generated.stats.stubs,
        placeholders: generated.stats.placeholders,
        skipped: generated.stats.skipped,
        result,
    })
}

fn collect_warnings(stats: &GenerateStats) -> Vec<String> {
    let methods = stats
        .methods
        .iter()
        .map(|name| format!("method '{}' is stubbed as a plain function", name));
    let duplicates = stats
        .duplicates
        .iter()
        .map(|name| format!("test function '{}' is generated more than once", name));
    methods.chain(duplicates).collect()
}
