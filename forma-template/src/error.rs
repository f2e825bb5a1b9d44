use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unbalanced marker '{marker}' in '{file}' at byte {offset}")]
    #[diagnostic(
        code(forma::unbalanced_marker),
        help("every start marker needs a matching end marker after it")
    )]
    UnbalancedMarker {
        file: String,
        marker: String,
        offset: usize,
    },

    #[error("output file '{path}' already exists")]
    #[diagnostic(
        code(forma::output_exists),
        help("remove the file or choose another --out directory")
    )]
    OutputExists { path: PathBuf },

    #[error("template '{name}' not found (available: {available})")]
    #[diagnostic(code(forma::template_not_found))]
    TemplateNotFound { name: String, available: String },

    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template settings in '{path}': {message}")]
    #[diagnostic(code(forma::template_settings))]
    Settings { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
