//! Go source parsing for unitmaker.
//!
//! Turns the text of one Go file into a [`SourceFile`]: the package name and
//! the ordered list of top-level declarations that test stubs are generated
//! from.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod syntax;

pub use error::{Error, Result, SourceContext};
pub use file::GoSource;
pub use parse::parse_str_with_filename;
pub use syntax::{
    Declaration, FunctionDecl, OtherDecl, OtherKind, Param, Receiver, SourceFile, TypeDecl,
    TypeExpr,
};
