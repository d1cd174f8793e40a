use std::io;
use std::path::PathBuf;

use slang_diagnostic::SourceError;
use slang_server::StartError;
use thiserror::Error;

use crate::commands::build::BuildError;
use crate::config::ConfigError;

/// Any failure of a `slang` command.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("build failed")]
    Build(#[from] BuildError),

    #[error("server failed")]
    Serve(#[from] StartError),

    #[error("could not start the async runtime")]
    Runtime(#[source] io::Error),

    #[error("a config file already exists at {}; remove it to create a new one", path.display())]
    ConfigExists { path: PathBuf },

    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] SourceError),
}
