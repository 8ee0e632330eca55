//! Core utilities for unitmaker.
//!
//! Output file handling and the naming rules that tie a Go source file to
//! its generated test file.

mod file;
mod paths;

pub use file::{File, FileRules, Overwrite, WriteResult};
pub use paths::{GO_EXTENSION, TEST_SUFFIX, is_test_file, test_file_path};
