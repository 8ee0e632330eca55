//! Test file naming.

use std::path::{Path, PathBuf};

/// Extension of Go source files, including the dot.
pub const GO_EXTENSION: &str = ".go";

/// Suffix the Go toolchain requires on test files.
pub const TEST_SUFFIX: &str = "_test.go";

/// Derive the test file path for a Go source file.
///
/// `dir/foo.go` becomes `dir/foo_test.go`. A name without the `.go` suffix
/// gets `_test.go` appended.
pub fn test_file_path(source: &Path) -> PathBuf {
    let Some(name) = source.file_name().map(|n| n.to_string_lossy()) else {
        return source.join(TEST_SUFFIX.trim_start_matches('_'));
    };
    let stem = name.strip_suffix(GO_EXTENSION).unwrap_or(name.as_ref());
    source.with_file_name(format!("{stem}{TEST_SUFFIX}"))
}

/// Whether the path already names a Go test file.
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(TEST_SUFFIX))
        .unwrap_or(false)
}
