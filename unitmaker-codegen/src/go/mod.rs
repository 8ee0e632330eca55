//! Go syntax builders for the generated test file.
//!
//! These produce [`CodeFragment`](crate::builder::CodeFragment)s and never
//! touch indentation themselves.

mod file;
mod func;

pub use file::GoFile;
pub use func::TestFunc;
