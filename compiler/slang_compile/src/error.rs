use std::io;
use std::path::PathBuf;

use slang_diagnostic::SourceError;
use thiserror::Error;

/// Failure of a compile; aborts the whole top-level compile.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("syntax error")]
    Syntax(#[from] SourceError),

    #[error("invalid input file extension for the {compiler} compiler: {}", path.display())]
    InvalidExtension {
        compiler: &'static str,
        path: PathBuf,
    },

    #[error("could not import \"{resource}\" (via {})", via.display())]
    Import {
        resource: String,
        via: PathBuf,
        #[source]
        source: Box<CompileError>,
    },

    #[error("could not fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not fetch {url}: server responded {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{backend} backend failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}
