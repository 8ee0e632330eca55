use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for unitmaker-go operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the source text and filename together so the error constructors
/// can attach a [`NamedSource`] without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error without a span.
    pub fn syntax_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a syntax error pointing at a byte range of the source.
    pub fn syntax_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create an error for a file without a `package` clause.
    pub fn missing_package_error(&self) -> Box<Error> {
        Box::new(Error::MissingPackage {
            src: self.named_source(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(unitmaker::io), help("check that the path points to a readable Go file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse Go source: {message}")]
    #[diagnostic(code(unitmaker::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("missing package clause")]
    #[diagnostic(
        code(unitmaker::missing_package),
        help("every Go file must start with a `package <name>` clause")
    )]
    MissingPackage {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("failed to load the Go grammar")]
    #[diagnostic(code(unitmaker::grammar))]
    Language {
        #[source]
        source: tree_sitter::LanguageError,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
