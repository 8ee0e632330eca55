use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use unitmaker_codegen::Indent;
use unitmaker_core::Overwrite;
use unitmaker_go::GoSource;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Go source file to generate tests for
    pub file: PathBuf,

    /// Test file to write (defaults to <name>_test.go next to FILE)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated test file without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep an existing test file instead of replacing it
    #[arg(long)]
    pub no_overwrite: bool,

    /// Indent generated code with N spaces instead of tabs
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub indent_width: Option<u8>,

    /// Print the parsed declarations as JSON and exit
    #[arg(long)]
    pub dump_declarations: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let source = GoSource::open(&self.file).unwrap_or_exit();

        if self.dump_declarations {
            let json = serde_json::to_string_pretty(source.source_file())
                .wrap_err("Failed to serialize declarations")?;
            println!("{}", json);
            return Ok(());
        }

        let report = ops::generate(
            &source,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
                overwrite: self.overwrite(),
                indent: self.indent(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn overwrite(&self) -> Overwrite {
        if self.no_overwrite {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        }
    }

    fn indent(&self) -> Indent {
        self.indent_width.map_or(Indent::GO, Indent::Spaces)
    }
}
