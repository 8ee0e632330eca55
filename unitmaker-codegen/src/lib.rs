//! Go test stub generation for unitmaker.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`go`] - Go syntax builders (TestFunc, GoFile)
//! - [`Generator`] - Walks a [`SourceFile`](unitmaker_go::SourceFile) and assembles the test file

pub mod builder;
pub mod go;

mod generator;
mod naming;
mod placeholder;
mod stub;
mod type_render;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generator::{GenerateStats, GeneratedTests, Generator, GeneratorOptions, TESTING_IMPORT};
pub use naming::{RESULT_HOLDER, TEST_PREFIX, test_name};
pub use placeholder::generate_placeholder;
pub use stub::{MOCK_TODO, generate_stub};
pub use type_render::render_type;
