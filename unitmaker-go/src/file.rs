use std::path::{Path, PathBuf};

use crate::{Error, Result, SourceFile, parse_str_with_filename};

/// A Go source file on disk, with its parsed declarations.
pub struct GoSource {
    path: PathBuf,
    file: SourceFile,
}

impl GoSource {
    /// Read and parse a Go file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let file = parse_str_with_filename(&content, &filename)?;

        Ok(Self { path, file })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed declarations.
    pub fn source_file(&self) -> &SourceFile {
        &self.file
    }
}
